use crate::domain::model::{ServiceCatalog, ServiceRecord};

/// Derives the visible subsequence for a search query: every record whose
/// title OR category contains the query case-insensitively as a substring,
/// in catalog order. The empty query matches everything. Always recomputed
/// from the full catalog, never from a previous result.
pub fn filter_records(catalog: &ServiceCatalog, query: &str) -> Vec<ServiceRecord> {
    let needle = query.to_lowercase();
    catalog
        .records()
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
