//! Filter controls generated from the dataset

use askama::Template;

use crate::filter::PartsChecklist;

use super::render_fragment;

#[derive(Template)]
#[template(path = "district_options.html")]
struct DistrictOptions<'a> {
    districts: &'a [String],
}

struct PartOption<'a> {
    name: &'a str,
    dom_id: String,
    checked: bool,
}

#[derive(Template)]
#[template(path = "parts_checkboxes.html")]
struct PartsCheckboxes<'a> {
    parts: Vec<PartOption<'a>>,
}

/// `<option>` list for the district select, headed by "All Districts"
pub fn district_options(districts: &[String]) -> String {
    render_fragment(&DistrictOptions { districts })
}

/// Checkbox grid for the parts filter, reflecting the checklist state
pub fn parts_checkboxes(checklist: &PartsChecklist) -> String {
    let parts = checklist
        .entries()
        .map(|(name, checked)| PartOption {
            name,
            dom_id: part_checkbox_id(name),
            checked,
        })
        .collect();
    render_fragment(&PartsCheckboxes { parts })
}

/// DOM id of a part checkbox: whitespace runs become `-`
pub fn part_checkbox_id(part: &str) -> String {
    format!("part-{}", part.split_whitespace().collect::<Vec<_>>().join("-"))
}
