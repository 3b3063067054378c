use serde::{Deserialize, Serialize};

/// A supplier reference as stored on a variant: a bare name, no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub name: String,
}

/// Read-only catalog variant snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub variant_code: String,
    #[serde(default)]
    pub suppliers: Vec<SupplierRef>,
}

/// One row of the canonical supplier directory, resolving freeform names to
/// stable identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDirectoryEntry {
    pub id: i64,
    pub name: String,
}
