use crate::model::types::*;
use axum::extract::FromRef;
use url::Url;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub reqwest_client: reqwest::Client,
    /// where `/activities` requests are passed on to
    pub upstream: Url,
    pub leptos_options: leptos::config::LeptosOptions,
}

impl AppState {
    pub const UPSTREAM_ENV: &'static str = "ACTIVITIES_API_URL";

    pub fn new(leptos_options: leptos::config::LeptosOptions) -> Result<Self, Error> {
        tracing::info!("Loading configuration for app_state...");
        if dotenvy::dotenv().is_err() {
            tracing::warn!("didn't find env file");
        };
        let upstream = std::env::var(Self::UPSTREAM_ENV)
            .map_err(|_| Error::EnvNotFound(Self::UPSTREAM_ENV.to_string()))?;
        let upstream = Url::parse(&upstream)?;
        if upstream.cannot_be_a_base() {
            return Err(Error::InvalidUrl(upstream.to_string()));
        }
        tracing::info!(%upstream, "activities backend configured");

        Ok(Self {
            reqwest_client: reqwest::Client::new(),
            upstream,
            leptos_options,
        })
    }
}
