//! `crimson-document` — renders purchase orders into the fixed, pre-styled
//! xlsx order template.
//!
//! The builder drives an abstract [`SheetDocument`] so the mapping logic
//! stays independent of the workbook implementation; [`XlsxDocument`] is the
//! production backing.

pub mod builder;
pub mod error;
pub mod schema;
pub mod sheet;
pub mod xlsx;

pub use builder::{suggested_file_name, BuildOptions, OrderArtifact, TemplateDocumentBuilder};
pub use error::DocumentError;
pub use sheet::{CellAddr, SheetDocument};
pub use xlsx::XlsxDocument;
