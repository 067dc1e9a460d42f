//! Dataset Model
//!
//! Typed view of `data.json`: commodity species plus narrative recommendation
//! blocks. JSON keys are camelCase. The dataset is immutable once parsed.
//!
//! Linkage and product type are closed enums with one explicit fallback each,
//! so unknown labels are a deliberate default rather than a string-compare gap.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Linkage
// ============================================================================

/// Position of a commodity in its value chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Linkage {
    Backward,
    Forward,
    /// Both sides of the chain; also the fallback for any unrecognised label
    Integrated,
}

impl Linkage {
    pub const ALL: [Linkage; 3] = [Linkage::Backward, Linkage::Forward, Linkage::Integrated];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Backward" => Linkage::Backward,
            "Forward" => Linkage::Forward,
            _ => Linkage::Integrated,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Linkage::Backward => "Backward",
            Linkage::Forward => "Forward",
            Linkage::Integrated => "Integrated",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Linkage::Backward => "⬅️",
            Linkage::Forward => "➡️",
            Linkage::Integrated => "⬅️➡️",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Linkage::Backward => "Backward Linkage",
            Linkage::Forward => "Forward Linkage",
            Linkage::Integrated => "Integrated Linkage",
        }
    }

    /// Badge/icon theme classes
    pub fn css_class(&self) -> &'static str {
        match self {
            Linkage::Backward => "bg-red-100 text-red-800",
            Linkage::Forward => "bg-green-100 text-green-800",
            Linkage::Integrated => "bg-blue-100 text-blue-800",
        }
    }

    /// Slice colour in the linkage distribution chart
    pub fn chart_color(&self) -> &'static str {
        match self {
            Linkage::Backward => "rgba(239, 68, 68, 0.7)",
            Linkage::Forward => "rgba(34, 197, 94, 0.7)",
            Linkage::Integrated => "rgba(59, 130, 246, 0.7)",
        }
    }
}

impl From<String> for Linkage {
    fn from(label: String) -> Self {
        Linkage::from_label(&label)
    }
}

impl From<Linkage> for String {
    fn from(linkage: Linkage) -> Self {
        linkage.label().to_string()
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Product Type
// ============================================================================

/// Whether the commodity is already traded as an NTFP
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Existing,
    Potential,
    /// Any other label, kept verbatim for display and matching
    Other(String),
}

impl ProductType {
    pub fn from_label(label: &str) -> Self {
        Self::from(label.to_string())
    }

    pub fn label(&self) -> &str {
        match self {
            ProductType::Existing => "Existing NTFP",
            ProductType::Potential => "Potential NTFP",
            ProductType::Other(label) => label,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProductType::Existing => "bg-green-100 text-green-800",
            ProductType::Potential => "bg-yellow-100 text-yellow-800",
            ProductType::Other(_) => "bg-purple-100 text-purple-800",
        }
    }
}

impl From<String> for ProductType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Existing NTFP" => ProductType::Existing,
            "Potential NTFP" => ProductType::Potential,
            _ => ProductType::Other(label),
        }
    }
}

impl From<ProductType> for String {
    fn from(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Per-species chart
// ============================================================================

/// Chart type named by `chartData.type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Other(String),
}

impl ChartKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ChartKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Other(kind),
        }
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

/// Chart shown in the detail view instead of an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ============================================================================
// Species / Recommendation / Dataset
// ============================================================================

/// One commodity entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub name: String,
    pub botanical: String,
    pub strength: String,
    pub justification: String,
    pub category: String,
    pub product_type: ProductType,
    pub linkage: Linkage,
    pub districts: Vec<String>,
    pub parts_used: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub chart_data: Option<ChartData>,
}

impl Species {
    pub fn in_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d == district)
    }

    pub fn uses_any_part<'a>(&self, mut parts: impl Iterator<Item = &'a str>) -> bool {
        parts.any(|part| self.parts_used.iter().any(|p| p == part))
    }
}

/// Narrative block rendered once, unfiltered. `content` is trusted rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub content: String,
}

/// Stable handle to a species: its position in the input array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub usize);

/// Whole contents of `data.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub species: Vec<Species>,
    pub recommendations: Vec<Recommendation>,
}

impl Dataset {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &Species)> {
        self.species.iter().enumerate().map(|(i, s)| (SpeciesId(i), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SPECIES: &str = r#"{
        "species": [{
            "name": "Wild Honey",
            "botanical": "Apis dorsata",
            "strength": "High demand",
            "justification": "Collectors already organised",
            "category": "Animal Product",
            "productType": "Existing NTFP",
            "linkage": "Backward",
            "districts": ["Alpha", "Beta"],
            "partsUsed": ["Comb"],
            "products": ["Raw honey", "Beeswax"],
            "chartData": {"type": "pie", "title": "Share", "labels": ["A", "B"], "values": [1, 2]}
        }],
        "recommendations": [{"title": "Cluster", "content": "<p>Form clusters</p>"}]
    }"#;

    #[test]
    fn test_parses_camel_case_keys() {
        let data = Dataset::from_json_slice(ONE_SPECIES.as_bytes()).unwrap();
        let species = &data.species[0];
        assert_eq!(species.product_type, ProductType::Existing);
        assert_eq!(species.linkage, Linkage::Backward);
        assert_eq!(species.parts_used, vec!["Comb"]);
        assert_eq!(species.image, None);
        let chart = species.chart_data.as_ref().unwrap();
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.values, vec![1.0, 2.0]);
        assert_eq!(data.recommendations.len(), 1);
    }

    #[test]
    fn test_unknown_linkage_falls_back_to_integrated() {
        let linkage: Linkage = serde_json::from_str("\"Both\"").unwrap();
        assert_eq!(linkage, Linkage::Integrated);
    }

    #[test]
    fn test_unknown_product_type_kept_verbatim() {
        let pt: ProductType = serde_json::from_str("\"Agroforestry\"").unwrap();
        assert_eq!(pt, ProductType::Other("Agroforestry".to_string()));
        assert_eq!(pt.label(), "Agroforestry");
        assert_eq!(pt.css_class(), "bg-purple-100 text-purple-800");
    }

    #[test]
    fn test_product_type_label_parsing_matches_deserialization() {
        for label in ["Existing NTFP", "Potential NTFP", "Community Asset"] {
            let parsed: ProductType = serde_json::from_str(&format!("\"{}\"", label)).unwrap();
            assert_eq!(ProductType::from_label(label), parsed);
            assert_eq!(parsed.label(), label);
        }
        assert_eq!(ProductType::from_label("Existing NTFP"), ProductType::Existing);
    }

    #[test]
    fn test_missing_species_array_is_malformed() {
        assert!(Dataset::from_json_slice(br#"{"recommendations": []}"#).is_err());
    }

    #[test]
    fn test_district_and_part_membership() {
        let data = Dataset::from_json_slice(ONE_SPECIES.as_bytes()).unwrap();
        let species = &data.species[0];
        assert!(species.in_district("Beta"));
        assert!(!species.in_district("Gamma"));
        assert!(species.uses_any_part(["Bark", "Comb"].into_iter()));
        assert!(!species.uses_any_part(["Bark"].into_iter()));
    }
}
