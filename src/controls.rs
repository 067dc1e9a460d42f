//! UI event to state transition table
//!
//! Every control the dashboard binds to produces a `UiEvent`. `transition`
//! maps (current state, event) onto what should happen next without touching
//! the surface, so the whole table is testable without a DOM.

use crate::data::{Linkage, ProductType, SpeciesId};
use crate::filter::{FilterState, Selection};

/// Single-choice button groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonGroup {
    ProductType,
    Linkage,
}

/// Input events forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A filter button was clicked; `value` is its `data-value`
    FilterButton { group: ButtonGroup, value: String },
    DistrictChanged(String),
    AllPartsToggled(bool),
    PartToggled { part: String, checked: bool },
    CardClicked(SpeciesId),
    CardKey { species: SpeciesId, key: String },
    CloseClicked,
    BackdropClicked,
    /// Key pressed anywhere in the document
    DocumentKey(String),
}

/// Outcome of a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the filter state and re-render the grid
    Refilter(FilterState),
    OpenDetail(SpeciesId),
    CloseDetail,
    Ignore,
}

fn activates_card(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn transition(state: &FilterState, event: &UiEvent, modal_open: bool) -> Transition {
    match event {
        UiEvent::FilterButton { group, value } => {
            let mut next = state.clone();
            match group {
                ButtonGroup::ProductType => {
                    next.product_type = Selection::from_value(value, ProductType::from_label)
                }
                ButtonGroup::Linkage => next.linkage = Selection::from_value(value, Linkage::from_label),
            }
            Transition::Refilter(next)
        }
        UiEvent::DistrictChanged(value) => {
            let mut next = state.clone();
            next.district = Selection::from_value(value, str::to_string);
            Transition::Refilter(next)
        }
        UiEvent::AllPartsToggled(checked) => {
            let mut next = state.clone();
            next.parts.set_all(*checked);
            Transition::Refilter(next)
        }
        UiEvent::PartToggled { part, checked } => {
            let mut next = state.clone();
            next.parts.set_part(part, *checked);
            Transition::Refilter(next)
        }
        UiEvent::CardClicked(species) => Transition::OpenDetail(*species),
        UiEvent::CardKey { species, key } if activates_card(key) => Transition::OpenDetail(*species),
        UiEvent::CardKey { .. } => Transition::Ignore,
        UiEvent::CloseClicked | UiEvent::BackdropClicked => Transition::CloseDetail,
        UiEvent::DocumentKey(key) if key == "Escape" && modal_open => Transition::CloseDetail,
        UiEvent::DocumentKey(_) => Transition::Ignore,
    }
}
