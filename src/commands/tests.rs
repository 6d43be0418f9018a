//! Unit tests for command helpers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;

    // Env-dependent cases live in one test so they never race each other.
    #[test]
    fn test_resolve_base_url_precedence() {
        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(resolve_base_url(None), SYNERGY_BASE_URL);

        std::env::set_var(BASE_URL_ENV_VAR, "http://env.test/synergy");
        assert_eq!(resolve_base_url(None), "http://env.test/synergy");

        // Flag wins over env
        assert_eq!(
            resolve_base_url(Some("http://flag.test/synergy".to_string())),
            "http://flag.test/synergy"
        );

        // Blank flag falls through to env
        assert_eq!(
            resolve_base_url(Some("  ".to_string())),
            "http://env.test/synergy"
        );

        std::env::set_var(BASE_URL_ENV_VAR, "");
        assert_eq!(resolve_base_url(None), SYNERGY_BASE_URL);

        std::env::remove_var(BASE_URL_ENV_VAR);
    }
}
