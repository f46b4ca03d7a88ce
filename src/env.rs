//! Environment variable helpers.
//!
//! Unset and empty are equivalent everywhere in this crate: exporting an
//! empty string is the same as not exporting the variable at all.

use std::env;

/// Read an environment variable, treating an empty value as absent.
pub fn var_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Read an environment variable, falling back to `default` when it is unset
/// or empty.
pub fn var_or(name: &str, default: &str) -> String {
    var_non_empty(name).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn missing_variable_is_absent() {
        env::remove_var("FILEDROP_TEST_MISSING");
        assert_eq!(var_non_empty("FILEDROP_TEST_MISSING"), None);
        assert_eq!(var_or("FILEDROP_TEST_MISSING", "fallback"), "fallback");
    }

    #[test]
    #[serial]
    fn empty_variable_counts_as_absent() {
        env::set_var("FILEDROP_TEST_EMPTY", "");
        assert_eq!(var_non_empty("FILEDROP_TEST_EMPTY"), None);
        assert_eq!(var_or("FILEDROP_TEST_EMPTY", "fallback"), "fallback");
        env::remove_var("FILEDROP_TEST_EMPTY");
    }

    #[test]
    #[serial]
    fn set_variable_wins_over_the_default() {
        env::set_var("FILEDROP_TEST_SET", "value");
        assert_eq!(var_non_empty("FILEDROP_TEST_SET").as_deref(), Some("value"));
        assert_eq!(var_or("FILEDROP_TEST_SET", "fallback"), "value");
        env::remove_var("FILEDROP_TEST_SET");
    }
}
