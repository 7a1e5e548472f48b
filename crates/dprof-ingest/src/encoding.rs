//! Source decoding. Bytes are decoded exactly once, at the adapter
//! boundary, before any format-specific logic runs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use dprof_model::{ProfileError, Result};

/// Decode raw bytes using the declared encoding label (default UTF-8).
///
/// Labels are case-insensitive and mirror the set accepted by option
/// validation. `base64` and `hex` decode the transfer encoding first and
/// then read the payload as UTF-8.
pub fn decode_source(bytes: &[u8], encoding: Option<&str>) -> Result<String> {
    let label = encoding.map_or_else(|| "utf-8".to_string(), str::to_lowercase);
    match label.as_str() {
        "utf8" | "utf-8" | "ascii" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "utf16le" | "ucs2" => {
            let (decoded, _, _) = encoding_rs::UTF_16LE.decode(bytes);
            Ok(decoded.into_owned())
        }
        "latin1" | "binary" => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        "base64" => {
            let text: String = bytes
                .iter()
                .map(|&b| char::from(b))
                .filter(|c| !c.is_whitespace())
                .collect();
            let decoded = BASE64
                .decode(text.as_bytes())
                .map_err(|_| ProfileError::Encoding("base64".to_string()))?;
            Ok(String::from_utf8_lossy(&decoded).into_owned())
        }
        "hex" => {
            let text: String = bytes
                .iter()
                .map(|&b| char::from(b))
                .filter(|c| !c.is_whitespace())
                .collect();
            let decoded =
                hex::decode(text.as_bytes()).map_err(|_| ProfileError::Encoding("hex".to_string()))?;
            Ok(String::from_utf8_lossy(&decoded).into_owned())
        }
        other => Err(ProfileError::Encoding(other.to_string())),
    }
}
