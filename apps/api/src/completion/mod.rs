// Profile completion engine.
// presence → fields → categories → scoring → report. Every step is a pure
// function of the profile and the category table; nothing here does I/O.

pub mod categories;
pub mod fields;
pub mod handlers;
pub mod presence;
pub mod report;
pub mod scoring;

pub use categories::{Category, CategoryTable, FieldSpec, TableError};
pub use report::{
    calculate_completion, completion_breakdown, next_focus, CategoryBreakdownEntry,
    CompletionResult,
};
