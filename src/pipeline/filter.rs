//! Filter + stable sort stage of the table pipeline.
//!
//! Pure: `apply` never mutates its input and always produces the same output
//! for the same (collection, filter state) pair.

use crate::model::TableRecord;

/// User-controlled filter/sort configuration for one table view.
///
/// Created with defaults when a view is entered, mutated by user input,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F> {
    /// Free-text search; empty matches everything.
    pub search_text: String,
    /// Category filter applied to the record's tag.
    pub category: CategoryFilter,
    /// Which numeric field to sort by.
    pub sort_field: F,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl<F: Default> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_field: F::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

/// Category predicate: everything, or one specific tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Pass all records.
    #[default]
    All,
    /// Pass only records whose tag equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Whether a record tag passes this filter.
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => tag == wanted,
        }
    }

    /// Label for the controls row.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(tag) => tag.as_str(),
        }
    }

    /// Advance through `All -> categories[0] -> ... -> All`.
    ///
    /// `categories` is the distinct tag set of the current collection, so the
    /// cycle always offers exactly the tags that exist.
    pub fn cycle(&self, categories: &[String]) -> Self {
        if categories.is_empty() {
            return CategoryFilter::All;
        }
        match self {
            CategoryFilter::All => CategoryFilter::Only(categories[0].clone()),
            CategoryFilter::Only(current) => {
                match categories.iter().position(|c| c == current) {
                    Some(i) if i + 1 < categories.len() => {
                        CategoryFilter::Only(categories[i + 1].clone())
                    }
                    // Last known tag, or a tag that vanished on reload.
                    _ => CategoryFilter::All,
                }
            }
        }
    }
}

/// Sort direction for the numeric sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first. Default: dashboards lead with the worst offenders.
    #[default]
    Desc,
}

impl SortDirection {
    /// Flip the direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow glyph for the controls row.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Apply the filter predicate and stable sort to a collection.
///
/// A record passes iff its search text contains `search_text` as a
/// case-insensitive substring AND its tag passes the category filter. The
/// sort is stable: records with equal sort keys keep their relative input
/// order regardless of direction, so repeated applications are deterministic
/// and `apply(apply(c, f), f) == apply(c, f)`.
pub fn apply<R: TableRecord + Clone>(records: &[R], filter: &FilterState<R::SortField>) -> Vec<R> {
    let needle = filter.search_text.to_lowercase();
    let mut out: Vec<R> = records
        .iter()
        .filter(|r| {
            (needle.is_empty() || r.search_text().to_lowercase().contains(&needle))
                && filter.category.matches(r.category())
        })
        .cloned()
        .collect();

    // sort_by is stable; equal keys compare Equal and keep input order.
    let field = filter.sort_field;
    let direction = filter.sort_direction;
    out.sort_by(|a, b| {
        let ord = a.sort_key(field).total_cmp(&b.sort_key(field));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

/// Distinct category tags of a collection, in first-appearance order.
///
/// Feeds [`CategoryFilter::cycle`] so the UI offers exactly the tags present.
pub fn distinct_categories<R: TableRecord>(records: &[R]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for record in records {
        if !tags.iter().any(|t| t == record.category()) {
            tags.push(record.category().to_string());
        }
    }
    tags
}
