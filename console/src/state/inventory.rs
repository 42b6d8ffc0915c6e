//! Working state of the server inventory page.
//!
//! DESIGN
//! ======
//! The page owns the [`ServerStore`] plus the four pipeline inputs and the
//! selection. Every input change that can shrink the result (search,
//! filters, page size) sends the user back to page 1; the derived view is
//! recomputed from scratch on demand. Typed search text is held in a
//! [`Debouncer`] and only reaches the query once typing pauses.
//!
//! Bulk shutdown and delete are acknowledged and clear the selection but do
//! not touch records.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use inventory::transfer::{ExportDocument, ExportOptions, TransferError, build_export};
use inventory::{
    Facet, FacetOption, FilterState, ListQuery, ListView, PageRange, PageState, ServerDraft, ServerField, ServerId,
    ServerRecord, ServerStore, SortState, StoreError, facet_options, page_window,
};
use time::OffsetDateTime;
use tracing::info;

use crate::config::DEFAULT_SEARCH_DEBOUNCE_MS;
use crate::util::debounce::Debouncer;

/// Numbered page buttons shown by the paginator.
pub const PAGE_BUTTONS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Export,
    Shutdown,
    Delete,
}

impl BulkAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Shutdown => "shutdown",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bulk action: {0} (expected export, shutdown or delete)")]
pub struct UnknownBulkAction(pub String);

impl FromStr for BulkAction {
    type Err = UnknownBulkAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "export" => Ok(Self::Export),
            "shutdown" => Ok(Self::Shutdown),
            "delete" => Ok(Self::Delete),
            _ => Err(UnknownBulkAction(s.to_owned())),
        }
    }
}

/// Result of applying a bulk action to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Export of the selected records.
    Exported(ExportDocument),
    /// Action recorded for `count` servers; records unchanged.
    Acknowledged { action: BulkAction, count: usize },
}

#[derive(Debug, Clone)]
pub struct InventoryPage {
    store: ServerStore,
    query: ListQuery,
    selection: BTreeSet<ServerId>,
    search_input: Debouncer<String>,
}

impl Default for InventoryPage {
    fn default() -> Self {
        Self::new(ServerStore::default())
    }
}

impl InventoryPage {
    #[must_use]
    pub fn new(store: ServerStore) -> Self {
        Self {
            store,
            query: ListQuery::default(),
            selection: BTreeSet::new(),
            search_input: Debouncer::new(Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS)),
        }
    }

    /// Replace the search box quiet period (`ConsoleConfig::search_debounce`).
    #[must_use]
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_input = Debouncer::new(delay);
        self
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(ServerStore::seeded())
    }

    #[must_use]
    pub fn store(&self) -> &ServerStore {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The current page of the table.
    #[must_use]
    pub fn view(&self) -> ListView<'_> {
        self.query.apply(self.store.records())
    }

    /// Every record the table would show across all pages, in order.
    #[must_use]
    pub fn matched(&self) -> Vec<&ServerRecord> {
        self.query.matched(self.store.records())
    }

    #[must_use]
    pub fn range(&self) -> PageRange {
        self.view().range(&self.query.page)
    }

    #[must_use]
    pub fn page_buttons(&self) -> Vec<usize> {
        page_window(self.query.page.number(), self.view().total_pages, PAGE_BUTTONS)
    }

    /// Options for the filter panel, drawn from the whole inventory.
    #[must_use]
    pub fn facet_options(&self, facet: Facet) -> Vec<FacetOption> {
        facet_options(self.store.records(), facet)
    }

    // =========================================================================
    // QUERY INPUTS
    // =========================================================================

    /// Apply `search` now, dropping any text still waiting in the search box.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search_input.flush();
        self.query.search = search.into();
        self.first_page();
    }

    /// Keystroke in the search box. The query is unchanged until
    /// [`InventoryPage::poll_search`] finds the input quiet.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input.push(text.into(), now);
    }

    /// Apply typed text once the quiet period has passed. Returns whether the
    /// query changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(text) => self.apply_typed(text),
            None => false,
        }
    }

    /// Apply typed text immediately (Enter).
    pub fn submit_search(&mut self) -> bool {
        match self.search_input.flush() {
            Some(text) => self.apply_typed(text),
            None => false,
        }
    }

    /// When pending typed text will be applied.
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_input.deadline()
    }

    fn apply_typed(&mut self, text: String) -> bool {
        if text == self.query.search {
            return false;
        }
        self.query.search = text;
        self.first_page();
        true
    }

    /// Returns whether `value` is accepted afterwards.
    pub fn toggle_filter(&mut self, facet: Facet, value: &str) -> bool {
        let accepted = self.query.filters.toggle(facet, value);
        self.first_page();
        accepted
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.query.filters = filters;
        self.first_page();
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.first_page();
    }

    /// Column header click.
    pub fn sort_by(&mut self, field: ServerField) {
        self.query.sort.toggle(field);
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.query.sort = sort;
    }

    /// Jump to `number`, kept inside the available pages.
    pub fn set_page(&mut self, number: usize) {
        let total_pages = self.view().total_pages;
        self.query.page = self.query.page.with_number(number).clamped(total_pages);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.query.page = PageState::first(size);
    }

    fn first_page(&mut self) {
        self.query.page = self.query.page.with_number(1);
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    #[must_use]
    pub fn selection(&self) -> &BTreeSet<ServerId> {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: ServerId) -> bool {
        self.selection.contains(&id)
    }

    /// Unknown ids are ignored.
    pub fn select(&mut self, id: ServerId, selected: bool) {
        if selected {
            if self.store.contains(id) {
                self.selection.insert(id);
            }
        } else {
            self.selection.remove(&id);
        }
    }

    /// Select every matched record across pages, or clear the selection.
    pub fn select_all(&mut self, selected: bool) {
        self.selection = if selected {
            self.matched().into_iter().map(|record| record.id).collect()
        } else {
            BTreeSet::new()
        };
    }

    #[must_use]
    pub fn selected_records(&self) -> Vec<&ServerRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| self.selection.contains(&record.id))
            .collect()
    }

    /// Apply `action` to the selection, then clear it.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError`] if the export options select no columns.
    pub fn bulk(
        &mut self,
        action: BulkAction,
        options: &ExportOptions,
        now: OffsetDateTime,
    ) -> Result<BulkOutcome, TransferError> {
        let count = self.selection.len();
        let outcome = match action {
            BulkAction::Export => BulkOutcome::Exported(build_export(self.selected_records(), options, now)?),
            BulkAction::Shutdown | BulkAction::Delete => BulkOutcome::Acknowledged { action, count },
        };
        info!(%action, count, selected = ?self.selection, "bulk action");
        self.selection.clear();
        Ok(outcome)
    }

    // =========================================================================
    // RECORDS
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if no id is left to assign.
    pub fn add(&mut self, draft: ServerDraft, now: OffsetDateTime) -> Result<ServerId, StoreError> {
        self.store.add(draft, now)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` is unknown.
    pub fn update(&mut self, id: ServerId, draft: ServerDraft, now: OffsetDateTime) -> Result<(), StoreError> {
        self.store.update(id, draft, now)
    }

    /// Delete one record and drop it from the selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` is unknown.
    pub fn remove(&mut self, id: ServerId) -> Result<ServerRecord, StoreError> {
        let record = self.store.remove(id)?;
        self.selection.remove(&id);
        let total_pages = self.view().total_pages;
        self.query.page = self.query.page.clamped(total_pages);
        Ok(record)
    }
}
