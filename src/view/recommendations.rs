//! Recommendation cards: one per entry, rendered once

use askama::Template;

use crate::data::Recommendation;

use super::render_fragment;

#[derive(Template)]
#[template(path = "recommendation_card.html")]
pub struct RecommendationCard<'a> {
    pub title: &'a str,
    /// Trusted rich text, inserted verbatim
    pub content: &'a str,
}

pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(|r| {
            render_fragment(&RecommendationCard {
                title: &r.title,
                content: &r.content,
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
