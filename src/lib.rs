//! NTFP Explorer
//!
//! Dashboard engine for browsing Non-Timber Forest Product commodities:
//! filterable species cards, a detail modal with an optional chart, static
//! recommendation cards and three aggregate charts.
//!
//! - `data`: dataset model (`data.json`)
//! - `loader`: one-shot dataset load and boot
//! - `filter`: filter state and the pure filter function
//! - `controls`: UI event → state transition table
//! - `view`: HTML fragments and chart configs
//! - `app`: the `Dashboard` controller binding it all to a host
//! - `surface`, `chart`: host capabilities (page elements, charting library)
//! - `preview`: static preview server (feature `preview`)

pub mod app;
pub mod chart;
pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod filter;
pub mod loader;
pub mod preview;
pub mod surface;
pub mod view;

// Re-export commonly used types
pub use app::Dashboard;
pub use config::ExplorerConfig;
pub use controls::{transition, ButtonGroup, Transition, UiEvent};
pub use data::{Dataset, Linkage, ProductType, Recommendation, Species, SpeciesId};
pub use error::LoadError;
pub use filter::{apply_filters, FilterOptions, FilterState, Selection};
pub use loader::{boot, load_dataset, DataSource, FileSource, HttpSource};
