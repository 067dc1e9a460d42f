//! Dashboard configuration
//!
//! Defaults reproduce the published dashboard; a JSON document may override
//! any subset of fields.

use serde::Deserialize;
use std::time::Duration;

/// Placeholder image service used when a species has no image or it fails to load
pub const PLACEHOLDER_BASE: &str = "https://placehold.co/600x400/e2e8f0/64748b";

/// Treemap cell colours, cycled by position
pub const TREEMAP_PALETTE: [&str; 11] = [
    "#2962ff", "#e65100", "#2e7d32", "#d50000", "#4527a0", "#006064", "#c51162", "#00b8d4",
    "#f9a825", "#5d4037", "#424242",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Dataset location, relative to the application base
    pub data_path: String,
    pub placeholder_base: String,
    /// Delay between showing the modal and starting its reveal transition
    pub modal_reveal_delay_ms: u64,
    /// Must match the CSS transition duration of the modal
    pub modal_close_delay_ms: u64,
    pub treemap_palette: Vec<String>,
    pub modal_chart_fill: Vec<String>,
    pub modal_chart_border: Vec<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: "data.json".to_string(),
            placeholder_base: PLACEHOLDER_BASE.to_string(),
            modal_reveal_delay_ms: 10,
            modal_close_delay_ms: 300,
            treemap_palette: TREEMAP_PALETTE.iter().map(|c| c.to_string()).collect(),
            modal_chart_fill: vec![
                "rgba(59, 130, 246, 0.5)".to_string(),
                "rgba(239, 68, 68, 0.5)".to_string(),
                "rgba(245, 158, 11, 0.5)".to_string(),
            ],
            modal_chart_border: vec![
                "rgba(59, 130, 246, 1)".to_string(),
                "rgba(239, 68, 68, 1)".to_string(),
                "rgba(245, 158, 11, 1)".to_string(),
            ],
        }
    }
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        anyhow::ensure!(
            !config.treemap_palette.is_empty(),
            "treemap_palette must contain at least one colour"
        );
        Ok(config)
    }

    pub fn modal_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.modal_reveal_delay_ms)
    }

    pub fn modal_close_delay(&self) -> Duration {
        Duration::from_millis(self.modal_close_delay_ms)
    }

    /// Placeholder image URL captioned with `name`
    pub fn placeholder_url(&self, name: &str) -> String {
        let caption = urlencoding::encode(name).replace("%20", "+");
        format!("{}?text={}", self.placeholder_base, caption)
    }

    pub fn palette_color(&self, position: usize) -> &str {
        match self.treemap_palette.len() {
            0 => TREEMAP_PALETTE[position % TREEMAP_PALETTE.len()],
            n => self.treemap_palette[position % n].as_str(),
        }
    }
}
