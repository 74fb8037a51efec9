use pitstop_core::constants::MAX_SESSION_ID_LEN;
use pitstop_core::errors::SessionError;

/// Reject empty, oversized, or control-character session ids.
pub fn validate_session_id(session_id: &str) -> Result<(), SessionError> {
    let reason = if session_id.trim().is_empty() {
        "session id is empty"
    } else if session_id.len() > MAX_SESSION_ID_LEN {
        "session id is longer than 256 bytes"
    } else if session_id.chars().any(char::is_control) {
        "session id contains control characters"
    } else {
        return Ok(());
    };
    Err(SessionError::InvalidSessionId {
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_ids() {
        assert!(validate_session_id("user-123").is_ok());
        assert!(validate_session_id("9f1c2b7e-2a64-4e3a-9d8c-5b1d3f7a0c11").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("   ").is_err());
        assert!(validate_session_id("a\nb").is_err());
        assert!(validate_session_id(&"x".repeat(257)).is_err());
    }
}
