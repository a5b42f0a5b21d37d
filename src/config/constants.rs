/// Maximum transcript length (in characters) that goes through the rewrite stages
///
/// Longer transcripts are truncated to this length, lowercased and returned
/// without any rewriting. This bounds the regex work done per utterance.
pub const MAX_TRANSCRIPT_LENGTH: usize = 1000;

/// Language used when the caller's locale has no registered pattern set
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default HTTP port for server mode
pub const DEFAULT_PORT: u16 = 3000;

/// Default request timeout for server mode (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_transcript_length() {
        assert_eq!(MAX_TRANSCRIPT_LENGTH, 1000);
    }

    #[test]
    fn test_default_language_not_empty() {
        assert!(!DEFAULT_LANGUAGE.is_empty());
    }
}
