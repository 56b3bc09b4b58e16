//! Reading notekeeper settings from the process environment.
//!
//! A variable that is set but blank counts as unset, so `NOTEKEEPER_SAY_URL=`
//! in a compose file disables the proxy instead of pointing it at "".

/// Value of `var`, or `None` when it is unset, blank or not valid UTF-8.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Parse a numeric setting, falling back to `default`.
///
/// Unset or blank is the quiet path. A value that does not parse is logged at
/// warn level so a typo in pool sizing or a timeout does not go unnoticed.
pub fn env_parse_with_default<T>(var: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = env_non_empty(var) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(
            var,
            value = %raw,
            default = %default,
            "invalid env var value, using default"
        );
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test touches a variable name no other test reads.

    #[test]
    fn parses_valid_value() {
        let var = "NOTEKEEPER_TEST_ENV_PARSE_VALID";
        unsafe { std::env::set_var(var, "42") };
        assert_eq!(env_parse_with_default::<u32>(var, 10), 42);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let var = "NOTEKEEPER_TEST_ENV_PARSE_PADDED";
        unsafe { std::env::set_var(var, " 7 ") };
        assert_eq!(env_parse_with_default::<u64>(var, 5), 7);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn invalid_value_falls_back() {
        let var = "NOTEKEEPER_TEST_ENV_PARSE_INVALID";
        unsafe { std::env::set_var(var, "banana") };
        assert_eq!(env_parse_with_default::<u64>(var, 5), 5);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn missing_value_falls_back() {
        assert_eq!(env_parse_with_default::<u32>("NOTEKEEPER_TEST_ENV_PARSE_MISSING", 10), 10);
    }

    #[test]
    fn blank_value_counts_as_unset() {
        let var = "NOTEKEEPER_TEST_ENV_BLANK";
        unsafe { std::env::set_var(var, "   ") };
        assert_eq!(env_non_empty(var), None);
        assert_eq!(env_parse_with_default::<u32>(var, 3), 3);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn non_empty_value_is_trimmed() {
        let var = "NOTEKEEPER_TEST_ENV_URL";
        unsafe { std::env::set_var(var, " http://localhost:8080/say\n") };
        assert_eq!(env_non_empty(var).as_deref(), Some("http://localhost:8080/say"));
        unsafe { std::env::remove_var(var) };
    }
}
