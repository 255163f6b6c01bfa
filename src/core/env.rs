use crate::domain::model::EnvVar;

/// Split one environment token.
///
/// Both `NAME=value` and the legacy `NAME:value` are accepted. When a token
/// contains both characters the one that appears first is the separator, so
/// `URL=http://x:80` keeps its URL intact. Returns `None` for an empty name.
pub fn parse_env_var(token: &str) -> Option<EnvVar> {
    let separator = match (token.find('='), token.find(':')) {
        (None, None) => None,
        (Some(eq), None) => Some(eq),
        (None, Some(colon)) => Some(colon),
        (Some(eq), Some(colon)) => Some(eq.min(colon)),
    };

    let (name, value) = match separator {
        // both separators are single-byte ASCII
        Some(idx) => (&token[..idx], Some(token[idx + 1..].to_string())),
        None => (token, None),
    };

    if name.is_empty() {
        tracing::debug!("Skipping environment entry without a name: {:?}", token);
        return None;
    }

    Some(EnvVar {
        name: name.to_string(),
        value,
    })
}

pub fn parse_env<S: AsRef<str>>(tokens: &[S]) -> Vec<EnvVar> {
    tokens
        .iter()
        .filter_map(|t| parse_env_var(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str, value: Option<&str>) -> EnvVar {
        EnvVar {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_equals_only() {
        assert_eq!(parse_env_var("DEBUG=1"), Some(env("DEBUG", Some("1"))));
        assert_eq!(parse_env_var("A=b=c"), Some(env("A", Some("b=c"))));
        assert_eq!(parse_env_var("EMPTY="), Some(env("EMPTY", Some(""))));
    }

    #[test]
    fn test_colon_only() {
        assert_eq!(parse_env_var("DEBUG:1"), Some(env("DEBUG", Some("1"))));
        assert_eq!(parse_env_var("A:b:c"), Some(env("A", Some("b:c"))));
    }

    #[test]
    fn test_no_separator_inherits() {
        assert_eq!(parse_env_var("HOME"), Some(env("HOME", None)));
    }

    #[test]
    fn test_earlier_separator_wins() {
        assert_eq!(
            parse_env_var("URL=http://x:80"),
            Some(env("URL", Some("http://x:80")))
        );
        assert_eq!(parse_env_var("URL:http=1"), Some(env("URL", Some("http=1"))));
    }

    #[test]
    fn test_empty_names_are_skipped() {
        assert_eq!(parse_env_var(""), None);
        assert_eq!(parse_env_var("=value"), None);
        assert_eq!(parse_env_var(":value"), None);
    }

    #[test]
    fn test_parse_env_preserves_order() {
        let vars = parse_env(&["B=2", "A", "C:3"]);
        let names: Vec<&str> = vars.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(vars[1].value, None);
    }
}
