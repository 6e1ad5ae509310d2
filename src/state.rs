use crate::data::filter::{YearRange, filter_by_year};
use crate::data::model::PaperDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Year range pre-selected when a dataset loads, clamped into its observed
/// bounds.
pub const DEFAULT_YEAR_RANGE: YearRange = (2020, 2021);

/// The full UI state, independent of rendering.
///
/// `dataset` is written once per load and read-only afterwards; the slider
/// only ever changes `year_range` and the cached `visible_indices`.
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<PaperDataset>,

    /// Currently selected inclusive year interval.
    pub year_range: YearRange,

    /// Indices of papers passing the current year filter (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            year_range: DEFAULT_YEAR_RANGE,
            visible_indices: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the filter to the default
    /// range, clamped into the dataset's observed year bounds.
    pub fn set_dataset(&mut self, dataset: PaperDataset) {
        self.year_range = match dataset.year_bounds {
            Some((min, max)) => (
                DEFAULT_YEAR_RANGE.0.clamp(min, max),
                DEFAULT_YEAR_RANGE.1.clamp(min, max),
            ),
            None => DEFAULT_YEAR_RANGE,
        };
        self.visible_indices = filter_by_year(&dataset, self.year_range);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filter_by_year(ds, self.year_range);
        }
    }

    /// Set the selected year interval and refilter if it changed.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        let range = if lo <= hi { (lo, hi) } else { (hi, lo) };
        if range != self.year_range {
            self.year_range = range;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean::{RawPaper, clean};
    use crate::data::model::PaperDataset;

    fn dataset(years: &[i32]) -> PaperDataset {
        let papers = years
            .iter()
            .map(|y| {
                clean(RawPaper {
                    publish_time: Some(format!("{y}-01-01")),
                    ..RawPaper::default()
                })
            })
            .collect();
        PaperDataset::new(papers, vec!["publish_time".to_string()])
    }

    #[test]
    fn default_range_applies_when_in_bounds() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[2018, 2019, 2020, 2021, 2022]));
        assert_eq!(state.year_range, (2020, 2021));
        assert_eq!(state.visible_indices, vec![2, 3]);
    }

    #[test]
    fn default_range_clamps_into_bounds() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[2022, 2023, 2024]));
        assert_eq!(state.year_range, (2022, 2022));
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn changing_the_range_refilters() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[2019, 2020, 2021]));
        state.set_year_range(2019, 2019);
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn inverted_input_is_normalized() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[2019, 2020, 2021]));
        state.set_year_range(2021, 2019);
        assert_eq!(state.year_range, (2019, 2021));
        assert_eq!(state.visible_indices.len(), 3);
    }
}
