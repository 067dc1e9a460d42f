//! Species cards for the grid

use askama::Template;

use crate::config::ExplorerConfig;
use crate::data::{Species, SpeciesId};

use super::render_fragment;

/// One grid card
#[derive(Template)]
#[template(path = "species_card.html")]
pub struct SpeciesCard<'a> {
    pub id: usize,
    pub name: &'a str,
    pub botanical: &'a str,
    pub strength: &'a str,
    pub image_src: String,
    pub fallback_src: String,
    pub linkage_icon: &'static str,
    pub linkage_tooltip: &'static str,
    pub linkage_class: &'static str,
    pub linkage_label: &'static str,
    pub product_type: &'a str,
    pub product_type_class: &'static str,
    pub category: &'a str,
    pub districts: &'a [String],
}

impl<'a> SpeciesCard<'a> {
    pub fn new(id: SpeciesId, species: &'a Species, config: &ExplorerConfig) -> Self {
        let fallback_src = config.placeholder_url(&species.name);
        Self {
            id: id.0,
            name: &species.name,
            botanical: &species.botanical,
            strength: &species.strength,
            image_src: species.image.clone().unwrap_or_else(|| fallback_src.clone()),
            fallback_src,
            linkage_icon: species.linkage.icon(),
            linkage_tooltip: species.linkage.tooltip(),
            linkage_class: species.linkage.css_class(),
            linkage_label: species.linkage.label(),
            product_type: species.product_type.label(),
            product_type_class: species.product_type.css_class(),
            category: &species.category,
            districts: &species.districts,
        }
    }
}

/// Grid contents for the visible subset, in the given order
pub fn render_grid(visible: &[(SpeciesId, &Species)], config: &ExplorerConfig) -> String {
    visible
        .iter()
        .map(|(id, species)| render_fragment(&SpeciesCard::new(*id, species, config)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn results_label(count: usize) -> String {
    format!("{} Commodities Found", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Linkage, ProductType};

    fn make_species() -> Species {
        Species {
            name: "Sal Seed".to_string(),
            botanical: "Shorea robusta".to_string(),
            strength: "Oil demand".to_string(),
            justification: "Processing gap".to_string(),
            category: "Oilseed".to_string(),
            product_type: ProductType::Potential,
            linkage: Linkage::Forward,
            districts: vec!["Alpha".to_string(), "Beta".to_string()],
            parts_used: vec!["Seed".to_string()],
            products: vec!["Sal butter".to_string()],
            image: None,
            chart_data: None,
        }
    }

    #[test]
    fn test_card_uses_placeholder_without_image() {
        let species = make_species();
        let html = render_grid(&[(SpeciesId(4), &species)], &ExplorerConfig::default());
        assert!(html.contains("text=Sal+Seed"));
        assert!(html.contains("data-species-id=\"4\""));
        assert!(html.contains("this.onerror=null"));
    }

    #[test]
    fn test_card_keeps_declared_image() {
        let mut species = make_species();
        species.image = Some("https://img.example/sal.jpg".to_string());
        let card = SpeciesCard::new(SpeciesId(0), &species, &ExplorerConfig::default());
        assert_eq!(card.image_src, "https://img.example/sal.jpg");
        assert!(card.fallback_src.contains("text=Sal+Seed"));
    }

    #[test]
    fn test_card_badges_and_districts() {
        let species = make_species();
        let html = render_grid(&[(SpeciesId(0), &species)], &ExplorerConfig::default());
        assert!(html.contains("Forward Linkage"));
        assert!(html.contains("bg-green-100 text-green-800"));
        assert!(html.contains("bg-yellow-100 text-yellow-800"));
        assert!(html.contains("Oilseed"));
        assert_eq!(html.matches("rounded-full\">Alpha</span>").count(), 1);
        assert_eq!(html.matches("rounded-full\">Beta</span>").count(), 1);
    }

    #[test]
    fn test_card_escapes_text() {
        let mut species = make_species();
        species.strength = "<script>x</script>".to_string();
        let html = render_grid(&[(SpeciesId(0), &species)], &ExplorerConfig::default());
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 Commodities Found");
        assert_eq!(results_label(12), "12 Commodities Found");
    }

    #[test]
    fn test_empty_grid_renders_nothing() {
        assert!(render_grid(&[], &ExplorerConfig::default()).is_empty());
    }
}
