// End-to-end exercises of the public pipeline, run from outside the crate
// the way a consumer would. Complements the module-local scenario tests in
// src/pipeline.rs (which cover dominance/weak/regex/cross-file/upgrade) with
// cases that cut across the line reader, output-path derivation, and config
// validation.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use dnsbl_prune::config::PruneConfig;
use dnsbl_prune::pipeline;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_output(path: &Path) -> String {
    let mut s = String::new();
    fs::File::open(path).unwrap().read_to_string(&mut s).unwrap();
    s
}

#[test]
fn crlf_input_is_normalized_and_survivors_emitted_with_lf() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "a.fat",
        "x,one.example.org,y,z,w,v,1\r\nx,two.example.org,y,z,w,v,1\r\n",
    );
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    pipeline::run(&config).unwrap();

    let out = read_output(&config.input_files[0].with_extension("txt"));
    assert_eq!(
        out,
        "x,one.example.org,y,z,w,v,1\nx,two.example.org,y,z,w,v,1\n"
    );
}

#[test]
fn blank_line_runs_do_not_shift_reported_line_numbers() {
    let dir = tempfile::tempdir().unwrap();
    // A blank run between two records must not desync which physical line
    // a survivor is read back from during emission.
    let input = write_input(
        dir.path(),
        "a.fat",
        "x,first.example.org,y,z,w,v,1\n\n\nx,second.example.org,y,z,w,v,1\n",
    );
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    pipeline::run(&config).unwrap();

    let out = read_output(&config.input_files[0].with_extension("txt"));
    assert_eq!(
        out,
        "x,first.example.org,y,z,w,v,1\nx,second.example.org,y,z,w,v,1\n"
    );
}

#[test]
fn final_line_without_trailing_newline_is_still_emitted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a.fat", "x,noeol.example.org,y,z,w,v,1");
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    pipeline::run(&config).unwrap();

    let out = read_output(&config.input_files[0].with_extension("txt"));
    assert_eq!(out, "x,noeol.example.org,y,z,w,v,1\n");
}

#[test]
fn output_path_strips_from_last_dot_in_multi_dot_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "list.v2.fat", "x,example.com,y,z,w,v,1\n");
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    pipeline::run(&config).unwrap();

    assert!(dir.path().join("list.v2.txt").exists());
}

#[test]
fn malformed_strength_field_is_counted_and_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "a.fat",
        "x,bad.example.org,y,z,w,v,9\nx,good.example.org,y,z,w,v,1\n",
    );
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.malformed_lines, 1);

    let out = read_output(&config.input_files[0].with_extension("txt"));
    assert_eq!(out, "x,good.example.org,y,z,w,v,1\n");
}

#[test]
fn rejects_domain_with_label_over_255_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let huge_label = "a".repeat(300);
    let content = format!("x,{}.example.org,y,z,w,v,1\n", huge_label);
    let input = write_input(dir.path(), "a.fat", &content);
    let config = PruneConfig {
        input_files: vec![input],
        ..PruneConfig::default()
    };
    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.rejected_domains, 1);

    let out = read_output(&config.input_files[0].with_extension("txt"));
    assert_eq!(out, "");
}

#[test]
fn empty_input_file_list_is_rejected_before_touching_disk() {
    let config = PruneConfig::default();
    assert!(pipeline::run(&config).is_err());
}

#[test]
fn shared_buffer_and_parallel_emit_are_mutually_exclusive() {
    let config = PruneConfig {
        input_files: vec![PathBuf::from("a.fat")],
        shared_buffer: true,
        parallel_emit: true,
        ..PruneConfig::default()
    };
    assert!(pipeline::run(&config).is_err());
}

#[test]
fn parallel_emit_matches_sequential_emit_output() {
    let dir = tempfile::tempdir().unwrap();
    let file_a = write_input(
        dir.path(),
        "a.fat",
        "x,abc.www.somedomain.com,y,z,w,v,1\nx,somedomain.com,y,z,w,v,1\n",
    );
    let file_b = write_input(dir.path(), "b.fat", "x,other.example.net,y,z,w,v,0\n");
    let config = PruneConfig {
        input_files: vec![file_a, file_b],
        parallel_emit: true,
        ..PruneConfig::default()
    };
    pipeline::run(&config).unwrap();

    let out_a = read_output(&config.input_files[0].with_extension("txt"));
    let out_b = read_output(&config.input_files[1].with_extension("txt"));
    assert_eq!(out_a, "x,somedomain.com,y,z,w,v,1\n");
    assert_eq!(out_b, "x,other.example.net,y,z,w,v,0\n");
}
