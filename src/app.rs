//! Dashboard controller
//!
//! Owns the immutable dataset, the current filter state, the detail modal and
//! the host bindings. Construction renders everything once; afterwards the
//! host forwards input events to `dispatch` and timer callbacks to
//! `on_deferred`.

use crate::chart::{ChartBackend, ChartPlugin};
use crate::config::ExplorerConfig;
use crate::controls::{transition, ButtonGroup, Transition, UiEvent};
use crate::data::{Dataset, Species, SpeciesId};
use crate::filter::{apply_filters, FilterOptions, FilterState, Selection, ALL_VALUE};
use crate::surface::{Checkbox, Deferred, ElementId, Surface};
use crate::view::{
    district_options, parts_checkboxes, render_grid, render_recommendations, results_label,
    DashboardCharts, DetailModal,
};

pub struct Dashboard<S: Surface, C: ChartBackend> {
    dataset: Dataset,
    options: FilterOptions,
    state: FilterState,
    modal: DetailModal<C::Handle>,
    /// Aggregate charts live for the whole session
    summary_charts: Vec<C::Handle>,
    surface: S,
    charts: C,
    config: ExplorerConfig,
}

impl<S: Surface, C: ChartBackend> Dashboard<S, C> {
    /// Render the initial page: summary metric, filter controls, grid,
    /// recommendations and aggregate charts
    pub fn new(dataset: Dataset, config: ExplorerConfig, surface: S, mut charts: C) -> Self {
        charts.register_plugin(ChartPlugin::DataLabels);

        let options = FilterOptions::from_dataset(&dataset);
        let state = FilterState::new(&options);

        let mut dashboard = Self {
            dataset,
            options,
            state,
            modal: DetailModal::new(),
            summary_charts: Vec::new(),
            surface,
            charts,
            config,
        };

        dashboard.update_summary_metrics();
        dashboard.populate_filters();
        dashboard.render_species();
        dashboard.render_recommendations();
        dashboard.render_dashboard_charts();

        tracing::info!(
            "Dashboard initialized ({} species, {} districts, {} parts)",
            dashboard.dataset.len(),
            dashboard.options.districts.len(),
            dashboard.options.parts.len()
        );
        dashboard
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn modal(&self) -> &DetailModal<C::Handle> {
        &self.modal
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    /// Linkage, category and district charts, in construction order
    pub fn summary_charts(&self) -> &[C::Handle] {
        &self.summary_charts
    }

    pub fn visible(&self) -> Vec<(SpeciesId, &Species)> {
        apply_filters(&self.dataset, &self.state)
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn dispatch(&mut self, event: UiEvent) {
        match transition(&self.state, &event, self.modal.is_open()) {
            Transition::Refilter(next) => {
                self.sync_controls(&next);
                self.state = next;
                self.render_species();
            }
            Transition::OpenDetail(id) => match self.dataset.get(id) {
                Some(species) => {
                    self.modal
                        .open(species, &mut self.surface, &mut self.charts, &self.config)
                }
                None => tracing::warn!("Ignoring activation of unknown species {:?}", id),
            },
            Transition::CloseDetail => self.modal.close(&mut self.surface, &self.config),
            Transition::Ignore => {}
        }
    }

    pub fn on_deferred(&mut self, task: Deferred) {
        self.modal.on_deferred(task, &mut self.surface);
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn update_summary_metrics(&mut self) {
        self.surface
            .set_text(ElementId::SpeciesCount, &self.dataset.len().to_string());
    }

    fn populate_filters(&mut self) {
        self.surface.replace_html(
            ElementId::DistrictFilter,
            &district_options(&self.options.districts),
        );
        self.surface.append_html(
            ElementId::PartsFilterContainer,
            &parts_checkboxes(&self.state.parts),
        );
        self.surface
            .set_checked(&Checkbox::AllParts, self.state.parts.all_checked());
    }

    fn render_species(&mut self) {
        let visible = apply_filters(&self.dataset, &self.state);
        tracing::debug!("Filter matched {} of {} species", visible.len(), self.dataset.len());

        self.surface
            .set_text(ElementId::ResultsCount, &results_label(visible.len()));
        self.surface
            .replace_html(ElementId::SpeciesGrid, &render_grid(&visible, &self.config));
    }

    fn render_recommendations(&mut self) {
        self.surface.replace_html(
            ElementId::Recommendations,
            &render_recommendations(&self.dataset.recommendations),
        );
    }

    fn render_dashboard_charts(&mut self) {
        let configs = DashboardCharts::build(&self.dataset.species, &self.config);
        for (canvas, config) in configs.canvases() {
            let handle = self.charts.construct(canvas, config);
            self.summary_charts.push(handle);
        }
    }

    /// Project control-visible differences between the current and next state
    fn sync_controls(&mut self, next: &FilterState) {
        if next.product_type != self.state.product_type {
            let value = selection_value(&next.product_type, |p| p.label().to_string());
            self.surface.mark_active(group_element(ButtonGroup::ProductType), &value);
        }
        if next.linkage != self.state.linkage {
            let value = selection_value(&next.linkage, |l| l.label().to_string());
            self.surface.mark_active(group_element(ButtonGroup::Linkage), &value);
        }
        for ((part, before), (_, after)) in self.state.parts.entries().zip(next.parts.entries()) {
            if before != after {
                self.surface.set_checked(&Checkbox::Part(part.to_string()), after);
            }
        }
        if next.parts.all_checked() != self.state.parts.all_checked() {
            self.surface
                .set_checked(&Checkbox::AllParts, next.parts.all_checked());
        }
    }
}

fn group_element(group: ButtonGroup) -> ElementId {
    match group {
        ButtonGroup::ProductType => ElementId::ProductTypeFilterGroup,
        ButtonGroup::Linkage => ElementId::LinkageFilterGroup,
    }
}

fn selection_value<T>(selection: &Selection<T>, label: impl FnOnce(&T) -> String) -> String {
    match selection {
        Selection::All => ALL_VALUE.to_string(),
        Selection::Only(value) => label(value),
    }
}
