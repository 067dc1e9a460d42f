//! View Renderer
//!
//! Projects the dataset and filter state onto HTML fragments and chart
//! configurations. Fragments are rendered with Askama templates under
//! `templates/`; every text field is escaped except recommendation content.
//!
//! ## Parts
//! - `card`: species cards for the grid
//! - `modal`: detail view body, chart config and open/close lifecycle
//! - `recommendations`: static narrative cards
//! - `dashboard`: aggregate charts over the full dataset
//! - `filters`: district options and part checkboxes

pub mod card;
pub mod dashboard;
pub mod filters;
pub mod modal;
pub mod recommendations;

use askama::Template;

pub use card::{render_grid, results_label, SpeciesCard};
pub use dashboard::{
    category_distribution, district_opportunities, linkage_distribution, DashboardCharts,
    TreemapCell, TREEMAP_LABEL_FIELD,
};
pub use filters::{district_options, part_checkbox_id, parts_checkboxes};
pub use modal::{DetailModal, ModalBody};
pub use recommendations::render_recommendations;

/// Static message shown when the dataset cannot be loaded
#[derive(Template)]
#[template(path = "load_error.html")]
pub struct LoadErrorMessage<'a> {
    pub message: &'a str,
}

/// Render a fragment, logging and dropping it if the template fails
pub(crate) fn render_fragment<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        String::new()
    })
}
