// Byte-level helpers shared by the line reader.

/// Find the offset of the next `\r` or `\n` byte in `buf`.
#[inline]
pub fn find_terminator(buf: &[u8]) -> Option<usize> {
    memchr::memchr2(b'\r', b'\n', buf)
}
