//! Data Loading
//!
//! Fetches `data.json` exactly once at startup. Any failure (transport,
//! non-success status, unreadable file, malformed JSON) is handled in `boot`:
//! logged, and the explorer replaced by a static message. No retry.

use std::path::PathBuf;

use crate::app::Dashboard;
use crate::chart::ChartBackend;
use crate::config::ExplorerConfig;
use crate::data::Dataset;
use crate::error::{LoadError, DATA_UNAVAILABLE_MESSAGE};
use crate::surface::{ElementId, Surface};
use crate::view::{render_fragment, LoadErrorMessage};

/// Where the raw dataset bytes come from
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// Fetch over HTTP, relative to the application's base URL
pub struct HttpSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpSource {
    pub fn new(url: reqwest::Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Resolve `data_path` against the directory serving the application
    pub fn relative_to(base: &reqwest::Url, data_path: &str) -> anyhow::Result<Self> {
        Ok(Self::new(base.join(data_path)?))
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tracing::debug!("Fetching dataset from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
            ));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Read from disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path).await.map_err(|source| LoadError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Fetch and parse the dataset
pub async fn load_dataset<D: DataSource>(source: &D) -> Result<Dataset, LoadError> {
    let bytes = source.fetch().await?;
    let dataset = Dataset::from_json_slice(&bytes)?;
    tracing::info!(
        "Loaded {} species and {} recommendations",
        dataset.species.len(),
        dataset.recommendations.len()
    );
    Ok(dataset)
}

/// Load the dataset and render the dashboard, or replace the explorer with
/// the static error message
pub async fn boot<D, S, C>(
    source: &D,
    config: ExplorerConfig,
    mut surface: S,
    charts: C,
) -> Result<Dashboard<S, C>, LoadError>
where
    D: DataSource,
    S: Surface,
    C: ChartBackend,
{
    match load_dataset(source).await {
        Ok(dataset) => Ok(Dashboard::new(dataset, config, surface, charts)),
        Err(e) => {
            tracing::error!("Could not initialize the application: {}", e);
            let message = render_fragment(&LoadErrorMessage {
                message: DATA_UNAVAILABLE_MESSAGE,
            });
            surface.replace_html(ElementId::Explorer, &message);
            Err(e)
        }
    }
}
