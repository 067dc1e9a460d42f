//! Aggregate dashboard charts
//!
//! Always computed over the full dataset; filters never reach this module.
//!
//! - Linkage distribution: doughnut, labels sorted, counts drawn on slices
//! - Category distribution: horizontal bar, descending by count
//! - District opportunity map: treemap, one cell per district

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::json;

use crate::chart::{ChartConfig, CATEGORY_CANVAS, DISTRICT_CANVAS, LINKAGE_CANVAS};
use crate::config::ExplorerConfig;
use crate::data::{Linkage, Species};

// ============================================================================
// Aggregates
// ============================================================================

/// Species per linkage, sorted by label
pub fn linkage_distribution(species: &[Species]) -> Vec<(Linkage, usize)> {
    let mut counts: FxHashMap<Linkage, usize> = FxHashMap::default();
    for s in species {
        *counts.entry(s.linkage).or_insert(0) += 1;
    }
    let mut sorted: Vec<(Linkage, usize)> = counts.into_iter().collect();
    sorted.sort_by(|(a, _), (b, _)| a.label().cmp(b.label()));
    sorted
}

/// Count occurrences keeping first-seen order
fn count_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label.to_string(), 1));
            }
        }
    }
    counts
}

/// Species per category, descending by count; ties keep first-seen order
pub fn category_distribution(species: &[Species]) -> Vec<(String, usize)> {
    let mut counts = count_in_order(species.iter().map(|s| s.category.as_str()));
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    counts
}

/// One treemap cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreemapCell {
    pub district: String,
    pub count: usize,
    pub color: String,
    pub label: String,
}

/// Species referencing each district; a species counts once per district it lists
pub fn district_opportunities(species: &[Species], config: &ExplorerConfig) -> Vec<TreemapCell> {
    count_in_order(species.iter().flat_map(|s| s.districts.iter().map(String::as_str)))
        .into_iter()
        .enumerate()
        .map(|(position, (district, count))| TreemapCell {
            label: format!("{}\n({})", district, count),
            color: config.palette_color(position).to_string(),
            district,
            count,
        })
        .collect()
}

// ============================================================================
// Chart configs
// ============================================================================

/// The three aggregate charts with their canvases
pub struct DashboardCharts {
    pub linkage: ChartConfig,
    pub category: ChartConfig,
    pub districts: ChartConfig,
}

impl DashboardCharts {
    pub fn build(species: &[Species], config: &ExplorerConfig) -> Self {
        Self {
            linkage: linkage_chart(species),
            category: category_chart(species),
            districts: district_chart(species, config),
        }
    }

    pub fn canvases(&self) -> [(&'static str, &ChartConfig); 3] {
        [
            (LINKAGE_CANVAS, &self.linkage),
            (CATEGORY_CANVAS, &self.category),
            (DISTRICT_CANVAS, &self.districts),
        ]
    }
}

fn linkage_chart(species: &[Species]) -> ChartConfig {
    let distribution = linkage_distribution(species);
    let labels: Vec<&str> = distribution.iter().map(|(l, _)| l.label()).collect();
    let values: Vec<usize> = distribution.iter().map(|(_, n)| *n).collect();
    let colors: Vec<&str> = distribution.iter().map(|(l, _)| l.chart_color()).collect();

    ChartConfig::new(
        "doughnut",
        json!({
            "labels": labels,
            "datasets": [{ "data": values, "backgroundColor": colors, "borderColor": ["#fff"] }],
        }),
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "bottom" },
                "datalabels": { "color": "#fff", "font": { "weight": "bold", "size": 16 } },
            },
        }),
    )
}

fn category_chart(species: &[Species]) -> ChartConfig {
    let distribution = category_distribution(species);
    let labels: Vec<&str> = distribution.iter().map(|(c, _)| c.as_str()).collect();
    let values: Vec<usize> = distribution.iter().map(|(_, n)| *n).collect();

    ChartConfig::new(
        "bar",
        json!({
            "labels": labels,
            "datasets": [{
                "label": "Number of Commodities",
                "data": values,
                "backgroundColor": "rgba(59, 130, 246, 0.7)",
            }],
        }),
        json!({
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "datalabels": { "anchor": "end", "align": "end", "color": "#1e3a8a", "font": { "weight": "bold" } },
            },
            "scales": { "x": { "beginAtZero": true, "ticks": { "stepSize": 1 } } },
        }),
    )
}

/// Tree cell property holding the "District\n(count)" text
pub const TREEMAP_LABEL_FIELD: &str = "label";

fn district_chart(species: &[Species], config: &ExplorerConfig) -> ChartConfig {
    let cells = district_opportunities(species, config);
    let colors: Vec<&str> = cells.iter().map(|c| c.color.as_str()).collect();

    ChartConfig::new(
        "treemap",
        json!({
            "datasets": [{
                "label": "District Opportunities",
                "tree": cells,
                "key": "count",
                "backgroundColor": colors,
                "labels": {
                    "display": true,
                    "field": TREEMAP_LABEL_FIELD,
                    "font": { "size": 14, "weight": "bold" },
                    "color": "white",
                },
            }],
        }),
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false }, "tooltip": { "enabled": false } },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProductType;

    fn species(name: &str, linkage: Linkage, category: &str, districts: &[&str]) -> Species {
        Species {
            name: name.to_string(),
            botanical: String::new(),
            strength: String::new(),
            justification: String::new(),
            category: category.to_string(),
            product_type: ProductType::Existing,
            linkage,
            districts: districts.iter().map(|d| d.to_string()).collect(),
            parts_used: vec![],
            products: vec![],
            image: None,
            chart_data: None,
        }
    }

    fn sample() -> Vec<Species> {
        vec![
            species("A", Linkage::Integrated, "Fibre", &["Alpha", "Beta"]),
            species("B", Linkage::Backward, "Medicinal", &["Beta"]),
            species("C", Linkage::Backward, "Medicinal", &["Gamma"]),
            species("D", Linkage::Forward, "Food", &["Beta"]),
        ]
    }

    #[test]
    fn test_linkage_distribution_sorted_by_label() {
        assert_eq!(
            linkage_distribution(&sample()),
            vec![(Linkage::Backward, 2), (Linkage::Forward, 1), (Linkage::Integrated, 1)]
        );
    }

    #[test]
    fn test_category_distribution_descending_with_stable_ties() {
        assert_eq!(
            category_distribution(&sample()),
            vec![
                ("Medicinal".to_string(), 2),
                ("Fibre".to_string(), 1),
                ("Food".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_multi_district_species_counts_for_each() {
        let cells = district_opportunities(&sample(), &ExplorerConfig::default());
        let counts: Vec<(&str, usize)> = cells.iter().map(|c| (c.district.as_str(), c.count)).collect();
        assert_eq!(counts, vec![("Alpha", 1), ("Beta", 3), ("Gamma", 1)]);
        assert_eq!(cells[1].label, "Beta\n(3)");
    }

    #[test]
    fn test_treemap_colors_cycle_by_position() {
        let many: Vec<Species> = (0..13)
            .map(|i| species(&format!("S{}", i), Linkage::Forward, "X", &[format!("D{}", i).as_str()]))
            .collect();
        let cells = district_opportunities(&many, &ExplorerConfig::default());
        assert_eq!(cells[0].color, "#2962ff");
        assert_eq!(cells[11].color, "#2962ff");
        assert_eq!(cells[12].color, "#e65100");
    }

    #[test]
    fn test_chart_configs() {
        let charts = DashboardCharts::build(&sample(), &ExplorerConfig::default());
        assert_eq!(charts.linkage.kind, "doughnut");
        assert_eq!(charts.linkage.data["labels"], json!(["Backward", "Forward", "Integrated"]));
        assert_eq!(charts.linkage.data["datasets"][0]["data"], json!([2, 1, 1]));
        assert_eq!(charts.category.options["indexAxis"], "y");
        assert_eq!(charts.districts.kind, "treemap");
        assert_eq!(charts.districts.data["datasets"][0]["tree"][1]["count"], 3);
        assert_eq!(charts.canvases()[2].0, DISTRICT_CANVAS);
    }

    #[test]
    fn test_treemap_labels_point_at_count_text() {
        let one = vec![species("A", Linkage::Forward, "Food", &["Alpha", "Beta"])];
        let charts = DashboardCharts::build(&one, &ExplorerConfig::default());
        let dataset = &charts.districts.data["datasets"][0];

        let field = dataset["labels"]["field"].as_str().unwrap();
        assert_eq!(field, TREEMAP_LABEL_FIELD);
        assert_eq!(dataset["labels"]["display"], true);
        assert_eq!(dataset["tree"][0][field], "Alpha\n(1)");
        assert_eq!(dataset["tree"][1][field], "Beta\n(1)");
        // One cell per district, so no grouping that would drop the label
        assert!(dataset.get("groups").is_none());
    }
}
