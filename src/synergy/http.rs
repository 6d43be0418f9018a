use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;

use crate::{
    cli::types::{CompetitionId, SeasonId},
    error::{BigvError, Result},
};


/// Basketball Victoria proxy in front of the Synergy API.
pub const SYNERGY_BASE_URL: &str = "https://prod.services.nbl.com.au/api_cache/bbv/synergy";

/// Records requested per call; the proxy serves everything in one page up to this.
pub const DEFAULT_LIMIT: u32 = 200;

/// A single proxied route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub route: String,
    pub limit: u32,
    pub include: Option<String>,
}

impl RouteRequest {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            limit: DEFAULT_LIMIT,
            include: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Query pairs in the order the proxy documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("route", self.route.clone()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(include) = &self.include {
            pairs.push(("include", include.clone()));
        }
        pairs.push(("format", "true".to_string()));
        pairs
    }

    /// Seasons of a competition.
    pub fn seasons(competition: &CompetitionId) -> Self {
        Self::new(format!("competitions/{}/seasons", competition))
    }

    /// Teams entered in a season.
    pub fn season_entities(season: &SeasonId) -> Self {
        Self::new(format!("seasons/{}/entities", season)).include("entities")
    }

    /// Per-player season totals, with the person and team resources side-loaded.
    pub fn person_statistics(season: &SeasonId) -> Self {
        Self::new(format!("seasons/{}/statistics/for/person", season))
            .include("persons,entities")
    }
}

/// Thin GET-only client for the proxy. No auth, retry, paging or caching.
#[derive(Debug, Clone)]
pub struct SynergyClient {
    http: Client,
    base_url: String,
}

impl SynergyClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!("bigv-stats/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one route and parse the body as JSON.
    ///
    /// A non-2xx status becomes [`BigvError::Status`] and transport failures
    /// come back as [`BigvError::Http`]. A body that is not JSON is
    /// [`BigvError::Json`].
    pub async fn fetch(&self, request: &RouteRequest) -> Result<Value> {
        let builder = self.http.get(&self.base_url).query(&request.query_pairs());

        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        tracing::debug!(%url, status = status.as_u16(), "synergy response");

        if !status.is_success() {
            return Err(BigvError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_seasons(&self, competition: &CompetitionId, limit: u32) -> Result<Value> {
        self.fetch(&RouteRequest::seasons(competition).limit(limit))
            .await
    }

    pub async fn get_season_entities(&self, season: &SeasonId, limit: u32) -> Result<Value> {
        self.fetch(&RouteRequest::season_entities(season).limit(limit))
            .await
    }

    pub async fn get_person_statistics(&self, season: &SeasonId, limit: u32) -> Result<Value> {
        self.fetch(&RouteRequest::person_statistics(season).limit(limit))
            .await
    }
}
