//! Service layer for business logic and orchestration.
//!
//! Services sit between the repository layer and callers: they fetch
//! readings, run the interval analytics per metric, and assemble the
//! per-location summary rows. Report rendering lives here too.

pub mod report;

pub mod summary;

pub use report::{render_csv, render_json, write_csv};
pub use summary::{
    build_summary, summarize_all_locations, summarize_location, summarize_locations,
    ReadingsByKind, SummaryError,
};
