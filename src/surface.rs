//! Page surface
//!
//! The fixed set of containers and controls the dashboard binds to by
//! identity. The host owns the page structure; the dashboard only fills it.

use std::time::Duration;

/// Named elements of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Main content area, replaced by the error message on load failure
    Explorer,
    SpeciesGrid,
    ResultsCount,
    SpeciesCount,
    DistrictFilter,
    PartsFilterContainer,
    ProductTypeFilterGroup,
    LinkageFilterGroup,
    Modal,
    ModalTitle,
    ModalBody,
    Recommendations,
}

impl ElementId {
    /// DOM id of the element
    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::Explorer => "explorer",
            ElementId::SpeciesGrid => "speciesGrid",
            ElementId::ResultsCount => "resultsCount",
            ElementId::SpeciesCount => "speciesCount",
            ElementId::DistrictFilter => "districtFilter",
            ElementId::PartsFilterContainer => "partsFilterContainer",
            ElementId::ProductTypeFilterGroup => "productTypeFilterGroup",
            ElementId::LinkageFilterGroup => "linkageFilterGroup",
            ElementId::Modal => "modal",
            ElementId::ModalTitle => "modalTitle",
            ElementId::ModalBody => "modalBody",
            ElementId::Recommendations => "recommendationsContainer",
        }
    }
}

/// Checkbox controls in the parts filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Checkbox {
    AllParts,
    Part(String),
}

/// Visual phase of the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    /// Displayed, still scaled down and transparent
    Entering,
    /// Transition to full size and opacity
    Shown,
    /// Exit transition running, still displayed
    Leaving,
}

/// Work the host must hand back through `Dashboard::on_deferred` after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    RevealModal { generation: u64 },
    HideModal { generation: u64 },
}

pub trait Surface {
    /// Replace the inner HTML of a container
    fn replace_html(&mut self, element: ElementId, html: &str);

    /// Append HTML after the existing children of a container
    fn append_html(&mut self, element: ElementId, html: &str);

    fn set_text(&mut self, element: ElementId, text: &str);

    fn set_checked(&mut self, checkbox: &Checkbox, checked: bool);

    /// Mark the button with `data-value == value` active and its siblings inactive
    fn mark_active(&mut self, group: ElementId, value: &str);

    fn set_modal_phase(&mut self, phase: ModalPhase);

    fn schedule(&mut self, delay: Duration, task: Deferred);
}
