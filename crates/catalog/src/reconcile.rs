//! Merge precheck: detects supplier associations that would be duplicated
//! if source variants were merged into a target variant.
//!
//! Variants reference suppliers by freeform name. Names are resolved against
//! the canonical supplier directory (trim + lowercase); names with no
//! directory match are dropped, never an error. The conflict set is the
//! intersection of the target's resolved ids with the union of the sources'.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::variant::{SupplierDirectoryEntry, VariantRecord};

/// Fetch failure at the collaborator boundary. Propagated as-is; the
/// reconciler itself has no fatal conditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("variant not found: {0}")]
    VariantNotFound(String),

    #[error("directory fetch failed: {0}")]
    Fetch(String),
}

/// Read access to variant records and the supplier directory.
///
/// The engine issues one `variant_detail` per code plus one
/// `supplier_directory` per precheck; the fetches are mutually independent,
/// so implementations may serve them in any order.
pub trait CatalogDirectory {
    fn variant_detail(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<VariantRecord, DirectoryError>> + Send;

    fn supplier_directory(
        &self,
    ) -> impl Future<Output = Result<Vec<SupplierDirectoryEntry>, DirectoryError>> + Send;
}

/// A supplier present on both sides of a proposed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    pub id: i64,
    pub name: String,
}

/// Result of a merge precheck. Empty `duplicates` means the merge is safe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergePrecheck {
    pub duplicates: Vec<MergeConflict>,
}

/// Detect suppliers that the target variant already carries and at least one
/// source variant would bring in again.
pub async fn precheck_conflicts<D: CatalogDirectory>(
    directory: &D,
    target_code: &str,
    source_codes: &[String],
) -> Result<MergePrecheck, DirectoryError> {
    let (entries, target) = tokio::try_join!(
        directory.supplier_directory(),
        directory.variant_detail(target_code),
    )?;
    let mut sources = Vec::with_capacity(source_codes.len());
    for code in source_codes {
        sources.push(directory.variant_detail(code).await?);
    }

    // id<->name maps over normalized names; first directory entry wins on
    // collision, in both directions.
    let mut name_to_id: HashMap<String, i64> = HashMap::new();
    let mut id_to_name: HashMap<i64, String> = HashMap::new();
    for entry in &entries {
        name_to_id.entry(normalize(&entry.name)).or_insert(entry.id);
        id_to_name
            .entry(entry.id)
            .or_insert_with(|| entry.name.clone());
    }

    let target_ids = resolve_ids(&name_to_id, std::slice::from_ref(&target));
    let source_ids = resolve_ids(&name_to_id, &sources);

    let mut duplicates: Vec<MergeConflict> = source_ids
        .intersection(&target_ids)
        .map(|id| MergeConflict {
            id: *id,
            // Unreachable fallback given the maps are built together, but a
            // stringified id is still a usable label.
            name: id_to_name.get(id).cloned().unwrap_or_else(|| id.to_string()),
        })
        .collect();
    duplicates.sort_by_key(|conflict| conflict.id);

    tracing::debug!(
        target = target_code,
        sources = source_codes.len(),
        conflicts = duplicates.len(),
        "merge precheck resolved"
    );
    Ok(MergePrecheck { duplicates })
}

/// Resolve every supplier name across `variants` to canonical ids,
/// silently dropping names absent from the directory.
fn resolve_ids(name_to_id: &HashMap<String, i64>, variants: &[VariantRecord]) -> HashSet<i64> {
    variants
        .iter()
        .flat_map(|variant| &variant.suppliers)
        .filter_map(|supplier| name_to_id.get(&normalize(&supplier.name)).copied())
        .collect()
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::variant::SupplierRef;

    /// In-memory collaborator stand-in.
    struct FakeDirectory {
        variants: HashMap<String, VariantRecord>,
        suppliers: Vec<SupplierDirectoryEntry>,
    }

    impl FakeDirectory {
        fn new(
            variants: &[(&str, &[&str])],
            suppliers: &[(i64, &str)],
        ) -> Self {
            let variants = variants
                .iter()
                .map(|(code, names)| {
                    (
                        code.to_string(),
                        VariantRecord {
                            variant_code: code.to_string(),
                            suppliers: names
                                .iter()
                                .map(|name| SupplierRef {
                                    name: name.to_string(),
                                })
                                .collect(),
                        },
                    )
                })
                .collect();
            let suppliers = suppliers
                .iter()
                .map(|(id, name)| SupplierDirectoryEntry {
                    id: *id,
                    name: name.to_string(),
                })
                .collect();
            Self {
                variants,
                suppliers,
            }
        }
    }

    impl CatalogDirectory for FakeDirectory {
        async fn variant_detail(&self, code: &str) -> Result<VariantRecord, DirectoryError> {
            self.variants
                .get(code)
                .cloned()
                .ok_or_else(|| DirectoryError::VariantNotFound(code.to_string()))
        }

        async fn supplier_directory(
            &self,
        ) -> Result<Vec<SupplierDirectoryEntry>, DirectoryError> {
            Ok(self.suppliers.clone())
        }
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|code| code.to_string()).collect()
    }

    #[tokio::test]
    async fn intersection_of_target_and_source_ids_is_reported() {
        // target → {1, 2}, sources → {2, 3}; conflict is exactly id 2.
        let directory = FakeDirectory::new(
            &[
                ("T1", &["한일물산", "대성상사"]),
                ("S1", &["대성상사"]),
                ("S2", &["미래유통"]),
            ],
            &[(1, "한일물산"), (2, "대성상사"), (3, "미래유통")],
        );

        let result = precheck_conflicts(&directory, "T1", &codes(&["S1", "S2"]))
            .await
            .unwrap();
        assert_eq!(
            result.duplicates,
            vec![MergeConflict {
                id: 2,
                name: "대성상사".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn names_are_matched_after_trim_and_case_folding() {
        let directory = FakeDirectory::new(
            &[("T1", &["  ACME Corp "]), ("S1", &["acme corp"])],
            &[(5, "Acme Corp")],
        );

        let result = precheck_conflicts(&directory, "T1", &codes(&["S1"]))
            .await
            .unwrap();
        assert_eq!(result.duplicates.len(), 1);
        assert_eq!(result.duplicates[0].id, 5);
        // Reported under the directory's canonical spelling.
        assert_eq!(result.duplicates[0].name, "Acme Corp");
    }

    #[tokio::test]
    async fn unresolvable_names_are_silently_dropped() {
        let directory = FakeDirectory::new(
            &[("T1", &["유령업체", "한일물산"]), ("S1", &["유령업체"])],
            &[(1, "한일물산")],
        );

        // 유령업체 has no directory entry: it resolves on neither side, so
        // no conflict is reported for it.
        let result = precheck_conflicts(&directory, "T1", &codes(&["S1"]))
            .await
            .unwrap();
        assert!(result.duplicates.is_empty());
    }

    #[tokio::test]
    async fn first_directory_entry_wins_on_duplicate_normalized_names() {
        let directory = FakeDirectory::new(
            &[("T1", &["대성상사"]), ("S1", &["대성상사"])],
            &[(2, "대성상사"), (9, "대성상사")],
        );

        let result = precheck_conflicts(&directory, "T1", &codes(&["S1"]))
            .await
            .unwrap();
        assert_eq!(result.duplicates.len(), 1);
        assert_eq!(result.duplicates[0].id, 2);
    }

    #[tokio::test]
    async fn conflicts_are_ordered_by_id() {
        let directory = FakeDirectory::new(
            &[
                ("T1", &["a", "b", "c"]),
                ("S1", &["c", "a"]),
            ],
            &[(3, "c"), (1, "a"), (2, "b")],
        );

        let result = precheck_conflicts(&directory, "T1", &codes(&["S1"]))
            .await
            .unwrap();
        let ids: Vec<i64> = result.duplicates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn disjoint_supplier_sets_are_mergeable() {
        let directory = FakeDirectory::new(
            &[("T1", &["한일물산"]), ("S1", &["미래유통"])],
            &[(1, "한일물산"), (3, "미래유통")],
        );

        let result = precheck_conflicts(&directory, "T1", &codes(&["S1"]))
            .await
            .unwrap();
        assert_eq!(result, MergePrecheck::default());
    }

    #[tokio::test]
    async fn missing_variant_propagates_the_fetch_error() {
        let directory = FakeDirectory::new(&[("T1", &[])], &[]);

        let err = precheck_conflicts(&directory, "T1", &codes(&["NOPE"]))
            .await
            .unwrap_err();
        assert_eq!(err, DirectoryError::VariantNotFound("NOPE".to_string()));
    }
}
