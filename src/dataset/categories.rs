use crate::names;

use super::Dataset;

/// The distinct non-empty category labels present in the dataset, always
/// preceded by the catch-all "All". Labels are collected case-sensitively
/// and sorted for a stable selector order.
pub fn labels(dataset: &Dataset) -> Vec<String> {
    let mut seen: Vec<String> = dataset
        .records()
        .iter()
        .filter_map(|r| r.category.as_deref())
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    seen.sort();
    seen.dedup();

    let mut labels = Vec::with_capacity(seen.len() + 1);
    labels.push(names::ALL_LABEL.to_string());
    labels.extend(seen);
    labels
}

/// Keeps the previously selected category if it still exists in the new
/// label set, otherwise falls back to "All".
pub fn effective_selection<'a>(labels: &'a [String], previous: &'a str) -> &'a str {
    if labels.iter().any(|l| l == previous) {
        previous
    } else {
        names::ALL_LABEL
    }
}
