use super::detail::{CloseReason, DetailPanel};
use crate::catalog::Catalog;
use crate::filters::{FilterControls, FilterGroup, PriceBucket, evaluate_indices};
use crate::models::{Item, ItemId};

/// Output of one evaluation, in catalog order
///
/// An empty set is the explicit "no results" state; renderers must show it as such.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    ids: Vec<ItemId>,
}

impl ResultSet {
    pub const EMPTY: ResultSet = ResultSet { ids: Vec::new() };

    pub fn from_ids(ids: Vec<ItemId>) -> Self {
        Self { ids }
    }

    fn from_indices(indices: Vec<usize>) -> Self {
        Self::from_ids(indices.into_iter().map(ItemId).collect())
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// User interaction, independent of any widget toolkit
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SearchChanged(String),
    SearchCharTyped(char),
    SearchCharDeleted,
    OptionToggled { group: FilterGroup, value: String, checked: bool },
    /// Flip one option relative to its current state
    OptionFlipped { group: FilterGroup, value: String },
    CeilingChanged(f64),
    /// Move the ceiling by a step, snapped to whole dollars
    CeilingStepped(f64),
    BucketChanged(PriceBucket),
    IncludeLifetimeChanged(bool),
    Reset,
    ItemSelected(ItemId),
    /// Click on the detail overlay; only closes when it lands outside the content
    OverlayClicked { inside_content: bool },
    CloseRequested(CloseReason),
}

/// Capability interface implemented by every renderer
pub trait View {
    /// Replace the displayed result list wholesale
    fn show_results(&mut self, catalog: &Catalog, results: &ResultSet);

    /// Show the detail panel for `open`, or hide it when `None`
    fn show_detail(&mut self, catalog: &Catalog, open: Option<ItemId>);
}

/// Owner of the catalog, the filter controls and the detail panel
///
/// Every filter-changing event takes a fresh snapshot of the controls, re-evaluates the
/// whole catalog and pushes the new result set to the view. There is no cached or
/// incremental result.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    controls: FilterControls,
    detail: DetailPanel,
    results: ResultSet,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let controls = FilterControls::new(catalog.price_ceiling_max());
        let mut session =
            Self { catalog, controls, detail: DetailPanel::Closed, results: ResultSet::EMPTY };
        session.refresh();
        session
    }

    /// Session whose controls are already positioned (e.g. from command-line flags)
    pub fn with_controls(catalog: Catalog, controls: FilterControls) -> Self {
        let mut session =
            Self { catalog, controls, detail: DetailPanel::Closed, results: ResultSet::EMPTY };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn detail(&self) -> DetailPanel {
        self.detail
    }

    /// Item shown in the detail panel, if open
    pub fn detail_item(&self) -> Option<&Item> {
        self.detail.current().and_then(|id| self.catalog.get(id))
    }

    /// Initial render: push the current results and detail state
    pub fn start(&self, view: &mut impl View) {
        view.show_results(&self.catalog, &self.results);
        view.show_detail(&self.catalog, self.detail.current());
    }

    /// Apply one event and update the view
    ///
    /// Returns true when the event re-evaluated the catalog. Edits that leave the controls
    /// untouched (a keystroke past the length limit, a step against the clamp) return false
    /// and push nothing.
    pub fn dispatch(&mut self, event: UiEvent, view: &mut impl View) -> bool {
        let changed = match event {
            UiEvent::SearchChanged(text) => {
                self.controls.set_search(&text);
                true
            }
            UiEvent::SearchCharTyped(c) => self.controls.push_search_char(c),
            UiEvent::SearchCharDeleted => self.controls.pop_search_char(),
            UiEvent::OptionToggled { group, value, checked } => {
                self.controls.set_option(group, &value, checked);
                true
            }
            UiEvent::OptionFlipped { group, value } => {
                self.controls.toggle_option(group, &value);
                true
            }
            UiEvent::CeilingChanged(value) => {
                self.controls.set_price_ceiling(value);
                true
            }
            UiEvent::CeilingStepped(delta) => self.controls.step_price_ceiling(delta),
            UiEvent::BucketChanged(bucket) => {
                self.controls.set_price_bucket(bucket);
                true
            }
            UiEvent::IncludeLifetimeChanged(include) => {
                self.controls.set_include_lifetime(include);
                true
            }
            UiEvent::Reset => {
                self.controls.reset();
                true
            }
            UiEvent::ItemSelected(id) => {
                if self.select(id) {
                    view.show_detail(&self.catalog, self.detail.current());
                }
                return false;
            }
            UiEvent::OverlayClicked { inside_content } => {
                if !inside_content && self.close_detail(CloseReason::OutsideClick) {
                    view.show_detail(&self.catalog, None);
                }
                return false;
            }
            UiEvent::CloseRequested(reason) => {
                if self.close_detail(reason) {
                    view.show_detail(&self.catalog, None);
                }
                return false;
            }
        };

        if changed {
            self.refresh();
            view.show_results(&self.catalog, &self.results);
        }
        changed
    }

    /// Mutable access to the controls; call [`Session::refresh`] after changing them
    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    /// Re-evaluate the full catalog against a fresh snapshot of the controls
    pub fn refresh(&mut self) {
        let state = self.controls.snapshot();
        self.results = ResultSet::from_indices(evaluate_indices(self.catalog.items(), &state));
        log::trace!("Filter evaluation: {} of {} items", self.results.len(), self.catalog.len());
    }

    /// Open the detail panel on an item; unknown ids are ignored
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.catalog.get(id).is_none() {
            log::debug!("Ignoring selection of unknown item {:?}", id);
            return false;
        }
        self.detail.open(id);
        true
    }

    pub fn close_detail(&mut self, reason: CloseReason) -> bool {
        self.detail.close(reason)
    }
}
