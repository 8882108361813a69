//! Base64url encoding and padding-tolerant decoding (RFC 7515 §2)
//!
//! Output never carries `=` padding. Input may omit up to three padding
//! characters or carry surplus ones: trailing `=` are dropped and the data
//! symbols padded back to a multiple of four before decoding.

use crate::error::{JwtError, JwtResult};
use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD},
};

/// URL-safe decoder over padded input that tolerates non-zero trailing bits
const URL_SAFE_PADDED_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes as unpadded base64url
#[inline]
#[must_use]
pub fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode base64url bytes, restoring canonical `=` padding first
///
/// # Errors
/// Returns `JwtError::Decode` when the padded input contains characters
/// outside the URL-safe alphabet or has an impossible length.
pub fn base64url_decode(input: &[u8]) -> JwtResult<Vec<u8>> {
    let data_len = input.iter().rposition(|&b| b != b'=').map_or(0, |i| i + 1);
    let data = &input[..data_len];

    let rem = data.len() % 4;
    if rem == 0 {
        return Ok(URL_SAFE_PADDED_LENIENT.decode(data)?);
    }

    let mut padded = Vec::with_capacity(data.len() + 4 - rem);
    padded.extend_from_slice(data);
    padded.resize(data.len() + 4 - rem, b'=');
    Ok(URL_SAFE_PADDED_LENIENT.decode(&padded)?)
}

/// Decode base64url text
///
/// The text must be ASCII; anything else is rejected before decoding.
///
/// # Errors
/// Returns `JwtError::NonAsciiInput` for non-ASCII text, otherwise the
/// errors of [`base64url_decode`].
pub fn base64url_decode_str(input: &str) -> JwtResult<Vec<u8>> {
    if !input.is_ascii() {
        return Err(JwtError::NonAsciiInput);
    }
    base64url_decode(input.as_bytes())
}
