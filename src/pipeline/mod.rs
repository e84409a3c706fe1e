//! The shared table pipeline (pure).
//!
//! Record collections flow `filter -> sort -> paginate` for rendering; the
//! export stage taps the filtered/sorted sequence *before* pagination, so a
//! CSV always contains every matching record regardless of the visible page.

pub mod export;
pub mod filter;
pub mod paginate;

pub use export::{export_filename, to_csv, write_export, Column};
pub use filter::{apply, distinct_categories, CategoryFilter, FilterState, SortDirection};
pub use paginate::{page, total_pages, PageState, PageView};
