//! Filter Engine
//!
//! Pure projection of (dataset, filter state) onto the ordered visible subset.
//!
//! Four predicates, combined conjunctively:
//! - product type: `all` or equal
//! - linkage: `all` or equal
//! - district: `all` or listed by the species
//! - parts: nothing selected, or "All Parts" checked, or any part in common
//!
//! "Nothing selected" and "everything selected" both leave the part
//! dimension unconstrained.

use crate::data::{Dataset, Linkage, ProductType, Species, SpeciesId};
use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Value of the "no constraint" option in every single-choice control
pub const ALL_VALUE: &str = "all";

// ============================================================================
// Single-choice selections
// ============================================================================

/// Exactly one active choice per single-choice dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selection<T> {
    /// Parse a control value, where `all` means unconstrained
    pub fn from_value(value: &str, parse: impl FnOnce(&str) -> T) -> Self {
        if value == ALL_VALUE {
            Selection::All
        } else {
            Selection::Only(parse(value))
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

// ============================================================================
// Parts checklist
// ============================================================================

/// Individual part checkboxes plus the aggregate "All Parts" checkbox
///
/// Invariant: `all_checked` is true iff every individual part is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsChecklist {
    parts: Vec<(String, bool)>,
    all_checked: bool,
}

impl PartsChecklist {
    /// Every part checked, aggregate checked
    pub fn new(parts: &[String]) -> Self {
        Self {
            parts: parts.iter().map(|p| (p.clone(), true)).collect(),
            all_checked: true,
        }
    }

    /// Aggregate toggle: every individual follows
    pub fn set_all(&mut self, checked: bool) {
        for (_, state) in &mut self.parts {
            *state = checked;
        }
        self.all_checked = checked;
    }

    /// Individual toggle: aggregate becomes "all checked", not "any checked"
    pub fn set_part(&mut self, part: &str, checked: bool) {
        if let Some((_, state)) = self.parts.iter_mut().find(|(name, _)| name == part) {
            *state = checked;
        }
        self.all_checked = self.parts.iter().all(|(_, state)| *state);
    }

    pub fn all_checked(&self) -> bool {
        self.all_checked
    }

    pub fn is_checked(&self, part: &str) -> bool {
        self.parts
            .iter()
            .any(|(name, state)| name == part && *state)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter(|(_, state)| *state)
            .map(|(name, _)| name.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.parts.iter().map(|(name, state)| (name.as_str(), *state))
    }

    pub fn admits(&self, species: &Species) -> bool {
        if self.all_checked || self.selected().next().is_none() {
            return true;
        }
        species.uses_any_part(self.selected())
    }
}

// ============================================================================
// Filter state and options
// ============================================================================

/// Current filter selections. Replaced, not mutated, by UI transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub product_type: Selection<ProductType>,
    pub linkage: Selection<Linkage>,
    pub district: Selection<String>,
    pub parts: PartsChecklist,
}

impl FilterState {
    /// Unfiltered state: every dimension `all`, every part checked
    pub fn new(options: &FilterOptions) -> Self {
        Self {
            product_type: Selection::All,
            linkage: Selection::All,
            district: Selection::All,
            parts: PartsChecklist::new(&options.parts),
        }
    }

    pub fn admits(&self, species: &Species) -> bool {
        let district_match = match &self.district {
            Selection::All => true,
            Selection::Only(district) => species.in_district(district),
        };

        self.product_type.admits(&species.product_type)
            && self.linkage.admits(&species.linkage)
            && district_match
            && self.parts.admits(species)
    }
}

/// District and part option lists, derived once from the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub parts: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let districts: BTreeSet<&str> = dataset
            .species
            .iter()
            .flat_map(|s| s.districts.iter().map(String::as_str))
            .collect();
        let parts: BTreeSet<&str> = dataset
            .species
            .iter()
            .flat_map(|s| s.parts_used.iter().map(String::as_str))
            .collect();

        Self {
            districts: districts.into_iter().map(str::to_string).collect(),
            parts: parts.into_iter().map(str::to_string).collect(),
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Visible subset, sorted by name
pub fn apply_filters<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<(SpeciesId, &'a Species)> {
    let mut visible: Vec<(SpeciesId, &Species)> = dataset
        .iter()
        .filter(|(_, species)| state.admits(species))
        .collect();
    visible.sort_by(|(_, a), (_, b)| compare_names(&a.name, &b.name));
    visible
}

thread_local! {
    /// CLDR root collation, punctuation significant, byte order as the final tiebreak
    static NAME_COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Locale-aware name ordering: accents and case are secondary to the base
/// letters, and lowercase sorts before uppercase on otherwise equal names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(name: &str, linkage: &str, product: &str, districts: &[&str], parts: &[&str]) -> Species {
        Species {
            name: name.to_string(),
            botanical: format!("{} botanica", name),
            strength: String::new(),
            justification: String::new(),
            category: "Fibre".to_string(),
            product_type: ProductType::from_label(product),
            linkage: Linkage::from_label(linkage),
            districts: districts.iter().map(|d| d.to_string()).collect(),
            parts_used: parts.iter().map(|p| p.to_string()).collect(),
            products: vec![],
            image: None,
            chart_data: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            species: vec![
                species("Rattan", "Backward", "Existing NTFP", &["Alpha"], &["Stem"]),
                species("Bamboo", "Forward", "Potential NTFP", &["Alpha", "Beta"], &["Stem", "Shoot"]),
                species("Amla", "Backward", "Existing NTFP", &["Beta"], &["Fruit"]),
            ],
            recommendations: vec![],
        }
    }

    fn names(visible: &[(SpeciesId, &Species)]) -> Vec<String> {
        visible.iter().map(|(_, s)| s.name.clone()).collect()
    }

    #[test]
    fn test_default_state_shows_everything_sorted() {
        let data = dataset();
        let state = FilterState::new(&FilterOptions::from_dataset(&data));
        assert_eq!(names(&apply_filters(&data, &state)), vec!["Amla", "Bamboo", "Rattan"]);
    }

    #[test]
    fn test_linkage_backward_selects_two() {
        let data = dataset();
        let mut state = FilterState::new(&FilterOptions::from_dataset(&data));
        state.linkage = Selection::Only(Linkage::Backward);
        assert_eq!(names(&apply_filters(&data, &state)), vec!["Amla", "Rattan"]);
    }

    #[test]
    fn test_district_and_product_type_combine() {
        let data = dataset();
        let mut state = FilterState::new(&FilterOptions::from_dataset(&data));
        state.district = Selection::Only("Alpha".to_string());
        state.product_type = Selection::Only(ProductType::Existing);
        assert_eq!(names(&apply_filters(&data, &state)), vec!["Rattan"]);
    }

    #[test]
    fn test_unknown_district_yields_empty() {
        let data = dataset();
        let mut state = FilterState::new(&FilterOptions::from_dataset(&data));
        state.district = Selection::Only("Nowhere".to_string());
        assert!(apply_filters(&data, &state).is_empty());
    }

    #[test]
    fn test_parts_intersection_after_unchecking() {
        let data = dataset();
        let mut state = FilterState::new(&FilterOptions::from_dataset(&data));
        state.parts.set_part("Fruit", false);
        assert!(!state.parts.all_checked());
        assert_eq!(names(&apply_filters(&data, &state)), vec!["Bamboo", "Rattan"]);
    }

    #[test]
    fn test_no_parts_selected_means_unconstrained() {
        let data = dataset();
        let mut state = FilterState::new(&FilterOptions::from_dataset(&data));
        state.parts.set_all(false);
        assert_eq!(apply_filters(&data, &state).len(), 3);
    }

    #[test]
    fn test_checklist_aggregate_tracks_individuals() {
        let parts = vec!["Fruit".to_string(), "Stem".to_string()];
        let mut checklist = PartsChecklist::new(&parts);
        assert!(checklist.all_checked());

        checklist.set_part("Stem", false);
        assert!(!checklist.all_checked());
        checklist.set_part("Fruit", false);
        assert!(!checklist.all_checked());

        checklist.set_part("Fruit", true);
        assert!(!checklist.all_checked(), "one checked is not all checked");
        checklist.set_part("Stem", true);
        assert!(checklist.all_checked());
    }

    #[test]
    fn test_checklist_aggregate_forces_individuals() {
        let parts = vec!["Fruit".to_string(), "Stem".to_string()];
        let mut checklist = PartsChecklist::new(&parts);
        checklist.set_all(false);
        assert!(checklist.entries().all(|(_, checked)| !checked));
        checklist.set_all(true);
        assert!(checklist.entries().all(|(_, checked)| checked));
    }

    #[test]
    fn test_options_sorted_and_deduplicated() {
        let options = FilterOptions::from_dataset(&dataset());
        assert_eq!(options.districts, vec!["Alpha", "Beta"]);
        assert_eq!(options.parts, vec!["Fruit", "Shoot", "Stem"]);
    }

    #[test]
    fn test_selection_from_value() {
        assert!(Selection::from_value("all", Linkage::from_label).is_all());
        assert_eq!(
            Selection::from_value("Forward", Linkage::from_label),
            Selection::Only(Linkage::Forward)
        );
    }

    #[test]
    fn test_compare_names_is_case_insensitive() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "ant"), Ordering::Greater);
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Sal", "Sal"), Ordering::Equal);
        assert_eq!(compare_names("Sal", "Sal Seed"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_sorts_accents_with_base_letter() {
        assert_eq!(compare_names("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(compare_names("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("éclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Ébène", "Fig"), Ordering::Less);
    }

    #[test]
    fn test_accented_name_visible_in_alphabetical_position() {
        let mut data = dataset();
        data.species.push(species("Élephant Apple", "Forward", "Potential NTFP", &["Beta"], &["Fruit"]));
        let options = FilterOptions::from_dataset(&data);
        let visible = apply_filters(&data, &FilterState::new(&options));
        assert_eq!(names(&visible), vec!["Amla", "Bamboo", "Élephant Apple", "Rattan"]);
    }
}
