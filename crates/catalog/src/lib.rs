//! `crimson-catalog` — catalog variant records and the supplier merge
//! precheck that guards variant merge operations.

pub mod reconcile;
pub mod variant;

pub use reconcile::{
    precheck_conflicts, CatalogDirectory, DirectoryError, MergeConflict, MergePrecheck,
};
pub use variant::{SupplierDirectoryEntry, SupplierRef, VariantRecord};
