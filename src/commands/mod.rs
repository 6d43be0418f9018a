//! Command implementations for the Basketball Victoria statistics CLI

pub mod common;
pub mod competitions;
pub mod entities;
pub mod player_stats;
pub mod seasons;

#[cfg(test)]
mod tests;

use crate::{synergy::http::SYNERGY_BASE_URL, BASE_URL_ENV_VAR};

/// Resolve the API base URL: flag first, then `BIGV_API_BASE_URL`, then the public proxy.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| SYNERGY_BASE_URL.to_string())
}
