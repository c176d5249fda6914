//! Dataset model and ingestion — tabular batches with typed column inspection.

pub mod batch;
pub mod source;
pub mod types;

pub use batch::DataBatch;
pub use source::{CsvSource, DataSource, JsonlSource};
pub use types::ValueKind;
