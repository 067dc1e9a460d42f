//! Detail modal
//!
//! Body rendering plus the open/close lifecycle. The modal owns at most one
//! live chart: it is destroyed before a replacement is constructed and when
//! the modal finishes closing.

use askama::Template;
use serde_json::json;

use crate::chart::{ChartBackend, ChartConfig, ChartHandle, MODAL_CANVAS};
use crate::config::ExplorerConfig;
use crate::data::{ChartData, ChartKind, Species};
use crate::surface::{Deferred, ElementId, ModalPhase, Surface};

use super::render_fragment;

// ============================================================================
// Body
// ============================================================================

#[derive(Template)]
#[template(path = "modal_body.html")]
pub struct ModalBody<'a> {
    pub name: &'a str,
    pub botanical: &'a str,
    pub strength: &'a str,
    pub parts_used: &'a [String],
    pub products: &'a [String],
    pub linkage_label: &'static str,
    pub justification: &'a str,
    /// Chart canvas instead of an image
    pub has_chart: bool,
    pub canvas_id: &'static str,
    pub image_src: String,
    pub fallback_src: String,
}

impl<'a> ModalBody<'a> {
    pub fn new(species: &'a Species, config: &ExplorerConfig) -> Self {
        let fallback_src = config.placeholder_url(&species.name);
        Self {
            name: &species.name,
            botanical: &species.botanical,
            strength: &species.strength,
            parts_used: &species.parts_used,
            products: &species.products,
            linkage_label: species.linkage.label(),
            justification: &species.justification,
            has_chart: species.chart_data.is_some(),
            canvas_id: MODAL_CANVAS,
            image_src: species.image.clone().unwrap_or_else(|| fallback_src.clone()),
            fallback_src,
        }
    }
}

/// Chart config for a species' own `chartData`
pub fn detail_chart_config(chart: &ChartData, config: &ExplorerConfig) -> ChartConfig {
    let is_pie = chart.kind == ChartKind::Pie;
    ChartConfig::new(
        chart.kind.as_str(),
        json!({
            "labels": chart.labels,
            "datasets": [{
                "label": "Value",
                "data": chart.values,
                "backgroundColor": config.modal_chart_fill,
                "borderColor": config.modal_chart_border,
                "borderWidth": 1,
            }],
        }),
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": is_pie },
                "title": { "display": true, "text": chart.title, "font": { "size": 14 } },
            },
            "scales": {
                "y": { "beginAtZero": true, "display": !is_pie },
            },
        }),
    )
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Detail modal state and its chart instance
pub struct DetailModal<H: ChartHandle> {
    phase: ModalPhase,
    /// Bumped on every open so delayed tasks from an earlier opening are ignored
    generation: u64,
    chart: Option<H>,
}

impl<H: ChartHandle> Default for DetailModal<H> {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Hidden,
            generation: 0,
            chart: None,
        }
    }
}

impl<H: ChartHandle> DetailModal<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn open<S, C>(&mut self, species: &Species, surface: &mut S, charts: &mut C, config: &ExplorerConfig)
    where
        S: Surface,
        C: ChartBackend<Handle = H>,
    {
        tracing::debug!("Opening detail view for {}", species.name);

        surface.set_text(ElementId::ModalTitle, &species.name);
        surface.replace_html(ElementId::ModalBody, &render_fragment(&ModalBody::new(species, config)));

        self.generation += 1;
        self.phase = ModalPhase::Entering;
        surface.set_modal_phase(ModalPhase::Entering);
        surface.schedule(
            config.modal_reveal_delay(),
            Deferred::RevealModal { generation: self.generation },
        );

        self.destroy_chart();
        if let Some(chart) = &species.chart_data {
            self.chart = Some(charts.construct(MODAL_CANVAS, &detail_chart_config(chart, config)));
        }
    }

    pub fn close<S: Surface>(&mut self, surface: &mut S, config: &ExplorerConfig) {
        if !self.is_open() {
            return;
        }
        tracing::debug!("Closing detail view");
        self.phase = ModalPhase::Leaving;
        surface.set_modal_phase(ModalPhase::Leaving);
        surface.schedule(
            config.modal_close_delay(),
            Deferred::HideModal { generation: self.generation },
        );
    }

    pub fn on_deferred<S: Surface>(&mut self, task: Deferred, surface: &mut S) {
        match task {
            Deferred::RevealModal { generation }
                if generation == self.generation && self.phase == ModalPhase::Entering =>
            {
                self.phase = ModalPhase::Shown;
                surface.set_modal_phase(ModalPhase::Shown);
            }
            Deferred::HideModal { generation }
                if generation == self.generation && self.phase == ModalPhase::Leaving =>
            {
                self.phase = ModalPhase::Hidden;
                surface.set_modal_phase(ModalPhase::Hidden);
                self.destroy_chart();
            }
            stale => tracing::debug!("Ignoring stale modal task {:?}", stale),
        }
    }

    fn destroy_chart(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.destroy();
        }
    }
}
