//! Wire format of the translate `batchexecute` speech RPC.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use prism_error::SpeechErrorKind;
use regex::Regex;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// RPC identifier of the speech call.
pub const TTS_RPC_ID: &str = "jQ1olc";

static AUDIO_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"\]"#).ok());

/// Build the `f.req` form value for one piece of text.
///
/// The inner parameter list is `[text, lang, speed, "null"]` where a JSON
/// `null` speed means normal speed.
///
/// # Examples
///
/// ```
/// use prism_models::package_rpc;
///
/// let rpc = package_rpc("Hi", "en");
/// assert_eq!(rpc, r#"[[["jQ1olc","[\"Hi\",\"en\",null,\"null\"]",null,"generic"]]]"#);
/// ```
pub fn package_rpc(text: &str, lang: &str) -> String {
    let parameter = json!([text, lang, Value::Null, "null"]).to_string();
    json!([[[TTS_RPC_ID, parameter, Value::Null, "generic"]]]).to_string()
}

/// Decode the MP3 bytes carried in a response body.
///
/// # Errors
///
/// `MissingAudio` when no line carries the RPC result, `Base64Decode` when
/// the payload is not valid base64.
pub fn extract_audio(body: &str) -> Result<Vec<u8>, SpeechErrorKind> {
    let pattern = AUDIO_PATTERN
        .as_ref()
        .ok_or_else(|| SpeechErrorKind::MissingAudio("audio pattern unavailable".to_string()))?;

    let line = body
        .lines()
        .find(|line| line.contains(TTS_RPC_ID))
        .ok_or_else(|| SpeechErrorKind::MissingAudio("no speech RPC in response".to_string()))?;

    let encoded = pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SpeechErrorKind::MissingAudio("speech RPC carried no audio".to_string()))?;

    STANDARD
        .decode(encoded)
        .map_err(|e| SpeechErrorKind::Base64Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_rpc_escapes_text() {
        let rpc = package_rpc("Say \"hi\"", "fr");
        let outer: Value = serde_json::from_str(&rpc).expect("outer json");
        let inner = outer[0][0][1].as_str().expect("parameter string");
        let params: Value = serde_json::from_str(inner).expect("inner json");
        assert_eq!(params, json!(["Say \"hi\"", "fr", null, "null"]));
        assert_eq!(outer[0][0][0], TTS_RPC_ID);
        assert_eq!(outer[0][0][3], "generic");
    }

    #[test]
    fn test_extract_audio_decodes_payload() {
        let encoded = STANDARD.encode([0xFFu8, 0xF3, 0x44, 0xC4]);
        let body = format!(
            ")]}}'\n\n104\n[[\"wrb.fr\",\"jQ1olc\",\"[\\\"{}\\\"]\",null,null,null,\"generic\"]]\n58\n[[\"di\",42]]",
            encoded
        );
        assert_eq!(extract_audio(&body), Ok(vec![0xFF, 0xF3, 0x44, 0xC4]));
    }

    #[test]
    fn test_extract_audio_without_rpc_line() {
        let body = ")]}'\n\n58\n[[\"di\",42]]";
        assert!(matches!(
            extract_audio(body),
            Err(SpeechErrorKind::MissingAudio(_))
        ));
    }

    #[test]
    fn test_extract_audio_with_empty_result() {
        let body = "[[\"wrb.fr\",\"jQ1olc\",null,null,null,[3],\"generic\"]]";
        assert!(matches!(
            extract_audio(body),
            Err(SpeechErrorKind::MissingAudio(_))
        ));
    }
}
