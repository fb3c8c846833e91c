//! Export file formats and the writer.

mod format;
pub mod writer;

pub use format::{ExportFormat, supported_extensions};
