/// Copies `text` into a zero-padded buffer of `N` bytes
///
/// Returns the buffer and the UTF-8 byte length, or `None` when the text does not fit.
pub fn encode_text<const N: usize>(text: &str) -> Option<([u8; N], u8)> {
    let bytes = text.as_bytes();
    if bytes.len() > N || bytes.len() > u8::MAX as usize {
        return None;
    }

    let mut buffer = [0u8; N];
    buffer[..bytes.len()].copy_from_slice(bytes);
    Some((buffer, bytes.len() as u8))
}

/// Reads back the first `len` bytes of a padded buffer as UTF-8
///
/// A corrupt length is clamped to the buffer and invalid UTF-8 decodes as an empty string.
pub fn decode_text(buffer: &[u8], len: u8) -> &str {
    let len = (len as usize).min(buffer.len());
    std::str::from_utf8(&buffer[..len]).unwrap_or_default()
}
