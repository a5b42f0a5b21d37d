use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub status: String,
    /// Language the transcript was normalized with, after fallback
    pub language: String,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub decimal_separator: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub default_language: String,
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_response_serialization() {
        let response = NormalizeResponse {
            status: "success".to_string(),
            language: "en".to_string(),
            normalized: "(150 * 20 / 100)".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"language\":\"en\""));
        assert!(json.contains("\"normalized\":\"(150 * 20 / 100)\""));
    }

    #[test]
    fn test_languages_response_serialization() {
        let response = LanguagesResponse {
            default_language: "en".to_string(),
            languages: vec![LanguageInfo {
                code: "fr".to_string(),
                name: "Français".to_string(),
                decimal_separator: "comma".to_string(),
            }],
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["default_language"], "en");
        assert_eq!(value["languages"][0]["code"], "fr");
        assert_eq!(value["languages"][0]["decimal_separator"], "comma");
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"ok","version":"0.1.0"}"#);
    }
}
