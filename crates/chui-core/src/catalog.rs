//! Official app catalog

use chui_meta::AppSource;

use crate::{Error, Result};

/// Where the official list of apps is published.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/chuistack/chui-apps/master/apps.yaml";

/// Environment variable overriding [`DEFAULT_CATALOG_URL`].
pub const CATALOG_URL_VARIABLE: &str = "CHUI_CATALOG_URL";

/// Supplies catalog entries.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Vec<AppSource>>;
}

/// Fetches the catalog as YAML over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Use `CHUI_CATALOG_URL` when set, the official URL otherwise.
    pub fn from_env() -> Self {
        std::env::var(CATALOG_URL_VARIABLE)
            .ok()
            .filter(|url| !url.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn error(&self, message: impl ToString) -> Error {
        Error::Catalog {
            url: self.url.clone(),
            message: message.to_string(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<AppSource>> {
        tracing::info!(url = %self.url, "Loading official app list");
        let body = ureq::get(&self.url)
            .call()
            .map_err(|e| self.error(e))?
            .into_string()
            .map_err(|e| self.error(e))?;
        parse_catalog(&body).map_err(|e| self.error(e))
    }
}

/// Parse a YAML list of catalog entries.
pub fn parse_catalog(text: &str) -> std::result::Result<Vec<AppSource>, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Catalog entries, fetched on first use and kept until refreshed.
#[derive(Debug)]
pub struct Catalog<S: CatalogSource> {
    source: S,
    cached: Option<Vec<AppSource>>,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    /// The catalog entries. `refresh` forces a new fetch.
    pub fn list(&mut self, refresh: bool) -> Result<&[AppSource]> {
        if refresh || self.cached.is_none() {
            let entries = self.source.fetch()?;
            tracing::debug!(entries = entries.len(), "Catalog loaded");
            self.cached = Some(entries);
        }
        Ok(self.cached.as_deref().unwrap_or_default())
    }
}
