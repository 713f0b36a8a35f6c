// Splits a domain into dot-separated labels, TLD first.
//
// Grounded on original_source/src/domain.c (update_DomainView): scans the
// domain right-to-left, cutting at each `.`, producing labels in reverse
// (TLD-first) order. A label longer than 63 bytes is accepted with a
// warning; one longer than 255 bytes fails the whole split (spec.md §4.3).

const MAX_WARN_LABEL_LEN: usize = 63;
const MAX_LABEL_LEN: usize = 255;

/// One label's byte range within the original domain buffer. `length` is a
/// `u8` (spec.md §4.3: label length fits in 8 bits; the 255-byte hard
/// ceiling below is exactly `u8::MAX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub offset: usize,
    pub length: u8,
}

/// Split `domain` into TLD-first labels. Returns `None` for empty input or
/// when any label exceeds the 255-byte hard ceiling.
pub fn split_labels(domain: &[u8]) -> Option<Vec<Label>> {
    if domain.is_empty() {
        return None;
    }

    let mut labels = Vec::with_capacity(4);
    let mut end = domain.len();

    for i in (0..domain.len()).rev() {
        if domain[i] == b'.' {
            let offset = i + 1;
            let length = end - offset;
            if !push_label(&mut labels, offset, length) {
                return None;
            }
            end = i;
        }
    }

    let length = end;
    if !push_label(&mut labels, 0, length) {
        return None;
    }

    Some(labels)
}

fn push_label(labels: &mut Vec<Label>, offset: usize, length: usize) -> bool {
    if length > MAX_LABEL_LEN {
        log::warn!(
            "label of {} bytes exceeds the {} byte hard ceiling; rejecting domain",
            length,
            MAX_LABEL_LEN
        );
        return false;
    }
    if length > MAX_WARN_LABEL_LEN {
        log::warn!(
            "label of {} bytes exceeds the usual {} byte maximum",
            length,
            MAX_WARN_LABEL_LEN
        );
    }
    // `length <= MAX_LABEL_LEN` (255) is guaranteed above, so this never
    // truncates.
    labels.push(Label {
        offset,
        length: length as u8,
    });
    true
}

/// Borrow the label bytes out of the original domain buffer.
pub fn label_bytes<'a>(domain: &'a [u8], label: Label) -> &'a [u8] {
    &domain[label.offset..label.offset + label.length as usize]
}
