use std::collections::{BTreeMap, HashMap};

use super::model::PaperDataset;

// ---------------------------------------------------------------------------
// Aggregators – pure reducers over the filtered subset
// ---------------------------------------------------------------------------
//
// Each function takes the dataset plus the indices produced by the year
// filter and returns a fresh result. Nothing is cached; every filter change
// recomputes from scratch.

/// Number of entries kept by the top-N rankings.
pub const TOP_N: usize = 10;

/// Papers per year, ascending by year. Counts sum to the subset size when
/// the indices come from the year filter (rows without a year are skipped).
pub fn year_histogram(dataset: &PaperDataset, indices: &[usize]) -> Vec<(i32, u64)> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for &i in indices {
        if let Some(year) = dataset.papers[i].year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// The ten most frequent journals in the subset, descending by count.
pub fn top_journals(dataset: &PaperDataset, indices: &[usize]) -> Vec<(String, u64)> {
    top_counts(indices.iter().map(|&i| dataset.papers[i].journal.as_str()))
}

/// The ten most frequent source collections, same policy as journals.
/// Returns `None` when the raw schema has no source column; rows with an
/// empty source cell are skipped.
pub fn top_sources(dataset: &PaperDataset, indices: &[usize]) -> Option<Vec<(String, u64)>> {
    if !dataset.has_source {
        return None;
    }
    Some(top_counts(
        indices
            .iter()
            .filter_map(|&i| dataset.papers[i].source.as_deref()),
    ))
}

/// Count occurrences and rank descending, truncated to [`TOP_N`].
/// Ties keep first-seen order (the sort is stable and values are counted in
/// encounter order).
fn top_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, u64> = HashMap::new();
    for value in values {
        match counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                order.push(value);
                counts.insert(value, 1);
            }
        }
    }

    let mut ranked: Vec<(String, u64)> = order
        .into_iter()
        .map(|value| (value.to_string(), counts[value]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_N);
    ranked
}

/// Token frequencies over all titles in the subset, joined by single spaces
/// and split on whitespace. An empty subset yields an empty map.
pub fn title_token_frequencies(
    dataset: &PaperDataset,
    indices: &[usize],
) -> HashMap<String, u64> {
    let joined = indices
        .iter()
        .map(|&i| dataset.papers[i].title.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut frequencies = HashMap::new();
    for token in joined.split_whitespace() {
        *frequencies.entry(token.to_string()).or_insert(0) += 1;
    }
    frequencies
}

/// Rank a token-frequency map for display: descending by count, then
/// alphabetical so equal counts come out in a stable order, truncated to `n`.
pub fn ranked_tokens(frequencies: &HashMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = frequencies
        .iter()
        .map(|(token, count)| (token.clone(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
