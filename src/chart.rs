//! Charting capability
//!
//! The dashboard never draws; it hands Chart.js-shaped configuration to a
//! `ChartBackend` and keeps the returned handles so it can destroy them.

use serde::Serialize;
use serde_json::Value;

/// Canvas the detail modal's chart is drawn on
pub const MODAL_CANVAS: &str = "modalChartCanvas";
pub const LINKAGE_CANVAS: &str = "linkageChart";
pub const CATEGORY_CANVAS: &str = "categoryBarChart";
pub const DISTRICT_CANVAS: &str = "districtTreemapChart";

/// Extensions registered once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPlugin {
    /// Draws values on top of bars/slices
    DataLabels,
}

/// Chart construction parameters: `type`, `data`, `options`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Value,
    pub options: Value,
}

impl ChartConfig {
    pub fn new(kind: impl Into<String>, data: Value, options: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
            options,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "type": self.kind,
            "data": self.data,
            "options": self.options,
        })
    }
}

/// A live chart instance
pub trait ChartHandle {
    /// Release the instance and its canvas bindings
    fn destroy(&mut self);
}

/// Charting library binding
///
/// Configs are Chart.js-shaped JSON with one extension: a dataset whose
/// `labels` block carries `"field": name` must draw each cell's label from
/// that property of its data object, verbatim, instead of the default label.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn register_plugin(&mut self, plugin: ChartPlugin);

    fn construct(&mut self, canvas: &str, config: &ChartConfig) -> Self::Handle;
}
