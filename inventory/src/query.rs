//! List query pipeline: text match, facet filter, stable sort, paginate.
//!
//! DESIGN
//! ======
//! The pipeline is a pure function of the record slice and a [`ListQuery`].
//! It borrows records rather than cloning them, never fails, and is cheap
//! enough to re-run on every keystroke, filter toggle, or page change.
//!
//! Absent optional attributes match and sort as the empty string.
//! Descending order reverses the comparison only; records with equal keys
//! keep their input order in both directions.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::facet::FilterState;
use crate::record::{ServerField, ServerRecord};

// =============================================================================
// SORT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction: {0} (expected asc or desc)")]
pub struct UnknownDirection(pub String);

impl FromStr for SortDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(UnknownDirection(s.to_owned())),
        }
    }
}

/// Column and direction the list is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: ServerField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { field: ServerField::Hostname, direction: SortDirection::Ascending }
    }
}

impl SortState {
    #[must_use]
    pub fn new(field: ServerField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the current column flips direction, any other column
    /// starts ascending.
    pub fn toggle(&mut self, field: ServerField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    #[must_use]
    pub fn compare(&self, a: &ServerRecord, b: &ServerRecord) -> Ordering {
        self.direction.apply(compare_field(a, b, self.field))
    }
}

/// Natural ascending order of `field`: numeric ids, chronological timestamps,
/// lexicographic text.
#[must_use]
pub fn compare_field(a: &ServerRecord, b: &ServerRecord, field: ServerField) -> Ordering {
    match field {
        ServerField::Id => a.id.cmp(&b.id),
        ServerField::LastUpdated => a.last_updated.cmp(&b.last_updated),
        other => a.field_text(other).cmp(&b.field_text(other)),
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One-based page number and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageParts")]
pub struct PageState {
    number: usize,
    size: usize,
}

#[derive(Deserialize)]
struct PageParts {
    number: usize,
    size: usize,
}

impl From<PageParts> for PageState {
    fn from(parts: PageParts) -> Self {
        Self::new(parts.number, parts.size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first(Self::DEFAULT_SIZE)
    }
}

impl PageState {
    /// Page sizes the inventory table offers.
    pub const SIZE_OPTIONS: [usize; 3] = [25, 50, 100];
    pub const DEFAULT_SIZE: usize = 25;

    /// Zero page numbers and sizes are raised to 1.
    #[must_use]
    pub fn new(number: usize, size: usize) -> Self {
        Self { number: number.max(1), size: size.max(1) }
    }

    #[must_use]
    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn with_number(self, number: usize) -> Self {
        Self::new(number, self.size)
    }

    /// Index of the first record on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }

    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }

    /// Pull the page number back inside `1..=total_pages`.
    #[must_use]
    pub fn clamped(self, total_pages: usize) -> Self {
        self.with_number(self.number.min(total_pages.max(1)))
    }
}

/// "Showing `start` to `end` of `total`" numbers (1-based, inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageRange {
    #[must_use]
    pub fn new(page: &PageState, total: usize) -> Self {
        let offset = page.offset();
        if offset >= total {
            return Self { start: 0, end: 0, total };
        }
        Self { start: offset + 1, end: (offset + page.size()).min(total), total }
    }
}

/// Page numbers for the paginator's numbered buttons.
///
/// Shows every page when they fit, otherwise a window of `max_buttons`
/// centered on `current` and pinned to the first/last pages at the edges.
#[must_use]
pub fn page_window(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }
    if total_pages <= max_buttons {
        return (1..=total_pages).collect();
    }
    let half = max_buttons / 2;
    let current = current.clamp(1, total_pages);
    let start = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages - max_buttons + 1
    } else {
        current - half
    };
    (start..start + max_buttons).collect()
}

// =============================================================================
// PIPELINE
// =============================================================================

/// The four inputs of the inventory list view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortState,
    pub page: PageState,
}

/// One derived page of the inventory list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListView<'a> {
    pub visible: Vec<&'a ServerRecord>,
    pub total_matched: usize,
    pub total_pages: usize,
}

impl ListQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, filters: FilterState, sort: SortState, page: PageState) -> Self {
        Self { search: search.into(), filters, sort, page }
    }

    /// Every record passing search and filters, in sorted order (no paging).
    #[must_use]
    pub fn matched<'a>(&self, records: &'a [ServerRecord]) -> Vec<&'a ServerRecord> {
        let needle = self.search.to_lowercase();
        let mut matched: Vec<&ServerRecord> = records
            .iter()
            .filter(|record| record.contains_text(&needle))
            .filter(|record| self.filters.matches(record))
            .collect();
        // `sort_by` is stable, so equal keys keep input order in either direction.
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }

    /// Run the full pipeline and cut out the requested page.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ServerRecord]) -> ListView<'a> {
        let matched = self.matched(records);
        let total_matched = matched.len();
        let total_pages = self.page.total_pages(total_matched);
        let visible = matched
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.size())
            .collect();
        ListView { visible, total_matched, total_pages }
    }
}

impl ListView<'_> {
    #[must_use]
    pub fn range(&self, page: &PageState) -> PageRange {
        PageRange::new(page, self.total_matched)
    }
}
