//! Global Application State Store
//!
//! One `AppState` in a `reactive_stores::Store`. UI events become `Action`s,
//! `AppState::apply` is the only place state changes, and any browser work
//! the change implies is handed back as an `Effect` for the caller to run.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::DraftCart;
use crate::config::Config;
use crate::history::HistoryFilter;
use crate::models::{CatalogItem, DailyFrequency, RequestRecord, TopItem};

/// Whether submit creates a new request or saves an existing one
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Create,
    Editing(String),
}

impl FormMode {
    pub fn title(&self) -> String {
        match self {
            FormMode::Create => "Create New Request".to_string(),
            FormMode::Editing(cn) => format!("Editing Request: {cn}"),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Submit Request",
            FormMode::Editing(_) => "Save Changes",
        }
    }

    pub fn editing(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Editing(cn) => Some(cn),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Text as typed
    pub query: String,
    /// Last accepted results, cheapest first
    pub results: Vec<CatalogItem>,
    pub open: bool,
    pub loading: bool,
    /// Bumped on every new search or cancellation; older responses are dropped
    pub seq: u64,
    pub min_query_len: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub top_items: Vec<TopItem>,
    pub frequency: Vec<DailyFrequency>,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub cart: DraftCart,
    pub mode: FormMode,
    pub search: SearchState,
    /// Everything from the last `GET /requests`
    pub history: Vec<RequestRecord>,
    pub filter: HistoryFilter,
    /// Control numbers whose item table is expanded
    pub expanded: HashSet<String>,
    pub dashboard: DashboardData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    QueryChanged(String),
    SearchCompleted { seq: u64, results: Vec<CatalogItem> },
    SearchFailed { seq: u64 },
    CloseResults,
    /// `close_results` is set when the item row itself (not its button) was clicked
    AddItem { item: CatalogItem, close_results: bool },
    SetQuantity { index: usize, raw: String },
    RemoveItem(usize),
    BeginEdit(String),
    ResetForm,
    HistoryLoaded(Vec<RequestRecord>),
    SetFilterText(String),
    SetShowDeleted(bool),
    ToggleExpanded(String),
    TopItemsLoaded(Vec<TopItem>),
    FrequencyLoaded(Vec<DailyFrequency>),
}

/// Browser work requested by a state change
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Restart the debounce timer for this search
    ScheduleSearch { seq: u64, query: String },
    /// Drop any pending debounce timer
    CancelSearch,
    ScrollToForm,
}

impl SearchState {
    fn query_changed(&mut self, raw: String) -> Option<Effect> {
        let query = raw.trim().to_string();
        self.query = raw;
        self.seq += 1;
        if query.chars().count() < self.min_query_len {
            self.open = false;
            self.loading = false;
            return Some(Effect::CancelSearch);
        }
        self.loading = true;
        Some(Effect::ScheduleSearch { seq: self.seq, query })
    }

    fn completed(&mut self, mut results: Vec<CatalogItem>) {
        results.sort_by(|a, b| a.unit_cost.total_cmp(&b.unit_cost));
        self.results = results;
        self.open = true;
        self.loading = false;
    }

    /// Reset after an item was picked from a result row
    fn picked(&mut self) -> Option<Effect> {
        self.query.clear();
        self.open = false;
        self.loading = false;
        self.seq += 1;
        Some(Effect::CancelSearch)
    }
}

fn begin_edit(
    history: &[RequestRecord],
    cart: &mut DraftCart,
    mode: &mut FormMode,
    control_number: String,
) -> Option<Effect> {
    let record = history
        .iter()
        .find(|r| r.control_number == control_number && !r.is_deleted())?;
    cart.replace_with(&record.items);
    *mode = FormMode::Editing(control_number);
    Some(Effect::ScrollToForm)
}

/// Forget expansion state for records that are gone
fn prune_expanded(expanded: &mut HashSet<String>, records: &[RequestRecord]) {
    expanded.retain(|cn| records.iter().any(|r| &r.control_number == cn));
}

fn toggle(expanded: &mut HashSet<String>, control_number: String) {
    if !expanded.remove(&control_number) {
        expanded.insert(control_number);
    }
}

fn stale(seq: u64, current: u64) -> bool {
    if seq != current {
        log::debug!("dropping stale search response {} (current {})", seq, current);
        return true;
    }
    false
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            search: SearchState {
                min_query_len: config.min_query_len,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::QueryChanged(raw) => self.search.query_changed(raw),
            Action::SearchCompleted { seq, results } => {
                if !stale(seq, self.search.seq) {
                    self.search.completed(results);
                }
                None
            }
            Action::SearchFailed { seq } => {
                if seq == self.search.seq {
                    self.search.loading = false;
                }
                None
            }
            Action::CloseResults => {
                self.search.open = false;
                None
            }
            Action::AddItem { item, close_results } => {
                self.cart.add(item);
                if close_results {
                    return self.search.picked();
                }
                None
            }
            Action::SetQuantity { index, raw } => {
                self.cart.update_quantity(index, &raw);
                None
            }
            Action::RemoveItem(index) => {
                self.cart.remove(index);
                None
            }
            Action::BeginEdit(control_number) => {
                begin_edit(&self.history, &mut self.cart, &mut self.mode, control_number)
            }
            Action::ResetForm => {
                self.mode = FormMode::Create;
                self.cart.clear();
                None
            }
            Action::HistoryLoaded(records) => {
                prune_expanded(&mut self.expanded, &records);
                self.history = records;
                None
            }
            Action::SetFilterText(text) => {
                self.filter.text = text;
                None
            }
            Action::SetShowDeleted(show) => {
                self.filter.show_deleted = show;
                None
            }
            Action::ToggleExpanded(control_number) => {
                toggle(&mut self.expanded, control_number);
                None
            }
            Action::TopItemsLoaded(items) => {
                self.dashboard.top_items = items;
                None
            }
            Action::FrequencyLoaded(days) => {
                self.dashboard.frequency = days;
                None
            }
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply an action to the store and return its follow-up effect, if any.
///
/// Same transitions as `AppState::apply`, but only the fields an action
/// touches are written, so readers of other fields are not re-run.
pub fn dispatch(store: &AppStore, action: Action) -> Option<Effect> {
    log::trace!("dispatch {:?}", action);
    match action {
        Action::QueryChanged(raw) => store.search().write().query_changed(raw),
        Action::SearchCompleted { seq, results } => {
            if !stale(seq, store.search().read_untracked().seq) {
                store.search().write().completed(results);
            }
            None
        }
        Action::SearchFailed { seq } => {
            if seq == store.search().read_untracked().seq {
                store.search().write().loading = false;
            }
            None
        }
        Action::CloseResults => {
            store.search().write().open = false;
            None
        }
        Action::AddItem { item, close_results } => {
            store.cart().write().add(item);
            if close_results {
                return store.search().write().picked();
            }
            None
        }
        Action::SetQuantity { index, raw } => {
            store.cart().write().update_quantity(index, &raw);
            None
        }
        Action::RemoveItem(index) => {
            store.cart().write().remove(index);
            None
        }
        Action::BeginEdit(control_number) => {
            let history = store.history().read_untracked();
            let mut cart = store.cart().get_untracked();
            let mut mode = store.mode().get_untracked();
            let effect = begin_edit(&history, &mut cart, &mut mode, control_number);
            drop(history);
            if effect.is_some() {
                store.cart().set(cart);
                store.mode().set(mode);
            }
            effect
        }
        Action::ResetForm => {
            store.mode().set(FormMode::Create);
            store.cart().write().clear();
            None
        }
        Action::HistoryLoaded(records) => {
            prune_expanded(&mut store.expanded().write(), &records);
            store.history().set(records);
            None
        }
        Action::SetFilterText(text) => {
            store.filter().write().text = text;
            None
        }
        Action::SetShowDeleted(show) => {
            store.filter().write().show_deleted = show;
            None
        }
        Action::ToggleExpanded(control_number) => {
            toggle(&mut store.expanded().write(), control_number);
            None
        }
        Action::TopItemsLoaded(items) => {
            store.dashboard().write().top_items = items;
            None
        }
        Action::FrequencyLoaded(days) => {
            store.dashboard().write().frequency = days;
            None
        }
    }
}
