use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "es",
            LanguageInfo {
                code: "es",
                flag: "🇪🇸",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_keys(child, &path, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    fn keys_of(code: &str) -> Vec<String> {
        let info = get_language_info(code).unwrap();
        let json: Value = serde_json::from_str(info.translation).unwrap();
        let mut keys = Vec::new();
        leaf_keys(&json, "", &mut keys);
        keys.sort();
        keys
    }

    #[test]
    fn test_bundles_parse() {
        for info in supported_languages().values() {
            assert!(serde_json::from_str::<Value>(info.translation).is_ok(), "{}", info.code);
        }
    }

    #[test]
    fn test_bundles_share_keys() {
        assert_eq!(keys_of("es"), keys_of("en"));
    }

    #[test]
    fn test_unknown_language() {
        assert!(get_language_info("xx").is_none());
        assert_eq!(get_language_info("es").unwrap().native_name, "Español");
    }
}
