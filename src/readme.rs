use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decode a README `content` payload into text.
///
/// The API wraps the Base64 text with embedded newlines; those are formatting
/// artifacts of the encoding, not data, and must be stripped before decoding.
/// The decoded bytes are then reinterpreted as UTF-8 so multi-byte characters
/// (emoji in particular) survive intact.
pub fn decode_readme(content: &str) -> Result<String> {
    let compact: String = content
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect();

    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
