use crate::model::{SavedKey, API_KEY_PREFIX, DEFAULT_KEY_NAME};

/// Display form of a secret: a short prefix (and suffix for longer keys),
/// never the full value.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        let head: String = chars.iter().take(4).collect();
        return format!("{head}***");
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Suggested name for a key added next to existing ones: `default` while it
/// is free, otherwise the first unused `key-N` starting at `N = count + 1`.
pub fn default_add_key_name(saved: &[SavedKey]) -> String {
    let taken = |name: &str| saved.iter().any(|k| k.name == name);
    if !taken(DEFAULT_KEY_NAME) {
        return DEFAULT_KEY_NAME.to_string();
    }
    let mut n = saved.len() + 1;
    loop {
        let candidate = format!("key-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Name used when login resolved neither a flag nor a prompt answer.
pub fn default_login_name(saved: &[SavedKey], selected: Option<&str>) -> String {
    if saved.is_empty() {
        return DEFAULT_KEY_NAME.to_string();
    }
    selected
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_KEY_NAME)
        .to_string()
}

pub fn validate_api_key(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("API key is required".to_string());
    }
    if !value.trim().starts_with(API_KEY_PREFIX) {
        return Err(format!("API key must start with {API_KEY_PREFIX}"));
    }
    Ok(())
}

pub fn validate_key_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Key name is required".to_string());
    }
    Ok(())
}

/// Trim a flag value, treating blank as absent.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<SavedKey> {
        names.iter().map(|n| SavedKey::new(*n, "re_x")).collect()
    }

    #[test]
    fn masks_short_keys_with_prefix_only() {
        assert_eq!(mask_api_key("re_abc"), "re_a***");
        assert_eq!(mask_api_key("re_1234567"), "re_1***");
        assert_eq!(mask_api_key(""), "***");
    }

    #[test]
    fn masks_long_keys_with_prefix_and_suffix() {
        assert_eq!(mask_api_key("re_12345678901"), "re_123...8901");
        let masked = mask_api_key("re_live_abcdefghijklmnop");
        assert_eq!(masked, "re_liv...mnop");
        assert!(!masked.contains("abcdefghijkl"));
    }

    #[test]
    fn masking_is_char_safe() {
        assert_eq!(mask_api_key("re_ééééééééééé"), "re_ééé...éééé");
    }

    #[test]
    fn add_name_prefers_default() {
        assert_eq!(default_add_key_name(&[]), "default");
        assert_eq!(default_add_key_name(&keys(&["work"])), "default");
    }

    #[test]
    fn add_name_counts_up_when_default_taken() {
        assert_eq!(default_add_key_name(&keys(&["default"])), "key-2");
        assert_eq!(default_add_key_name(&keys(&["default", "work"])), "key-3");
    }

    #[test]
    fn add_name_skips_taken_numbers() {
        assert_eq!(default_add_key_name(&keys(&["default", "key-3"])), "key-4");
    }

    #[test]
    fn login_name_defaults() {
        assert_eq!(default_login_name(&[], Some("work")), "default");
        assert_eq!(default_login_name(&keys(&["work"]), Some("work")), "work");
        assert_eq!(default_login_name(&keys(&["work"]), Some("  ")), "default");
        assert_eq!(default_login_name(&keys(&["work"]), None), "default");
    }

    #[test]
    fn api_key_validation() {
        assert_eq!(validate_api_key(""), Err("API key is required".to_string()));
        assert_eq!(
            validate_api_key("bad_token"),
            Err("API key must start with re_".to_string())
        );
        assert_eq!(validate_api_key("re_ok"), Ok(()));
    }

    #[test]
    fn trimmed_drops_blank_values() {
        assert_eq!(trimmed(Some("  work ".into())).as_deref(), Some("work"));
        assert_eq!(trimmed(Some("   ".into())), None);
        assert_eq!(trimmed(None), None);
    }
}
