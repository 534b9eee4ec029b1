use regex::Regex;
use url::Url;

use crate::schema::Validator;

/// The whole string must match `pattern` somewhere; anchor it to match fully.
pub fn matches(name: &str, pattern: Regex) -> Validator {
    let description = format!("Validates string against custom pattern: {}", pattern.as_str());
    Validator::for_str(format!("Invalid {} format", name), move |s| pattern.is_match(s))
        .with_description(description)
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |part: &str| !part.is_empty() && !part.contains(char::is_whitespace);
    clean(local)
        && clean(domain)
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// `local@domain.tld` with no whitespace.
pub fn email() -> Validator {
    Validator::for_str("Invalid email format", is_email)
        .with_description("Validates email format (example@domain.com)")
}

/// Options for `url`.
#[derive(Debug, Clone)]
pub struct UrlOptions {
    /// Allowed schemes, with or without a trailing `:`. Empty allows any.
    pub protocols: Vec<String>,
    /// Require the host's last label to be at least two characters.
    pub require_tld: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            protocols: Vec::new(),
            require_tld: true,
        }
    }
}

fn is_url(value: &str, options: &UrlOptions) -> bool {
    let Ok(parsed) = Url::parse(value) else {
        return false;
    };
    if !options.protocols.is_empty()
        && !options
            .protocols
            .iter()
            .any(|p| p.trim_end_matches(':') == parsed.scheme())
    {
        return false;
    }
    if options.require_tld {
        let tld = parsed
            .host_str()
            .and_then(|host| host.rsplit('.').next())
            .unwrap_or_default();
        if tld.chars().count() < 2 {
            return false;
        }
    }
    true
}

/// An absolute URL, optionally restricted by scheme and TLD presence.
pub fn url(options: UrlOptions) -> Validator {
    Validator::for_str("Invalid URL format", move |s| is_url(s, &options))
        .with_description("Validates URL format with configurable protocol and TLD requirements")
}

/// ASCII letters and digits only, optionally allowing spaces.
pub fn alphanumeric(allow_spaces: bool) -> Validator {
    let message = if allow_spaces {
        "Value must contain only letters, numbers, and spaces"
    } else {
        "Value must contain only letters and numbers"
    };
    Validator::for_str(message, move |s| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || (allow_spaces && c == ' '))
    })
    .with_description("Validates alphanumeric strings with optional space allowance")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_uses_pattern_name_in_message() {
        let validator = matches("slug", Regex::new(r"^[a-z0-9-]+$").unwrap());
        assert!(validator.check(&json!("my-service")));
        assert!(!validator.check(&json!("My Service")));
        assert_eq!(validator.message(), "Invalid slug format");
    }

    #[test]
    fn test_email() {
        assert!(email().check(&json!("ops@example.com")));
        assert!(!email().check(&json!("ops@localhost")));
        assert!(!email().check(&json!("ops example@example.com")));
        assert!(!email().check(&json!("@example.com")));
        assert!(!email().check(&json!("a@b@example.com")));
    }

    #[test]
    fn test_url_protocols_and_tld() {
        let any = url(UrlOptions::default());
        assert!(any.check(&json!("https://example.com/path")));
        assert!(!any.check(&json!("http://localhost:8080")));
        assert!(!any.check(&json!("not a url")));

        let local = url(UrlOptions {
            protocols: vec!["http:".to_string(), "https".to_string()],
            require_tld: false,
        });
        assert!(local.check(&json!("http://localhost:8080")));
        assert!(!local.check(&json!("ftp://files.example.com")));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric(false).check(&json!("abc123")));
        assert!(!alphanumeric(false).check(&json!("abc 123")));
        assert!(alphanumeric(true).check(&json!("abc 123")));
        assert!(!alphanumeric(true).check(&json!("abc_123")));
    }
}
