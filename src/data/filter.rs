use super::model::PaperDataset;

// ---------------------------------------------------------------------------
// Year-range filter
// ---------------------------------------------------------------------------

/// Inclusive `(lo, hi)` year interval selected by the UI control.
pub type YearRange = (i32, i32);

/// Return indices of papers whose publication year lies in `[lo, hi]`.
///
/// Papers with a missing year never pass, regardless of the interval. Bounds
/// are not validated: an inverted interval simply selects nothing.
pub fn filter_by_year(dataset: &PaperDataset, (lo, hi): YearRange) -> Vec<usize> {
    dataset
        .papers
        .iter()
        .enumerate()
        .filter(|(_, paper)| paper.year.is_some_and(|y| lo <= y && y <= hi))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean::{RawPaper, clean};
    use crate::data::model::PaperDataset;

    fn dataset(years: &[Option<i32>]) -> PaperDataset {
        let papers = years
            .iter()
            .map(|y| {
                clean(RawPaper {
                    publish_time: y.map(|y| format!("{y}-06-01")),
                    ..RawPaper::default()
                })
            })
            .collect();
        PaperDataset::new(papers, vec!["publish_time".to_string()])
    }

    #[test]
    fn selects_inclusive_interval() {
        let ds = dataset(&[Some(2019), Some(2020), Some(2020), Some(2021), None]);
        let indices = filter_by_year(&ds, (2020, 2021));
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn every_selected_row_is_in_range() {
        let ds = dataset(&[Some(2017), Some(2018), None, Some(2022), Some(2020)]);
        for &i in &filter_by_year(&ds, (2018, 2021)) {
            let year = ds.papers[i].year.unwrap();
            assert!((2018..=2021).contains(&year));
        }
    }

    #[test]
    fn missing_years_never_pass() {
        let ds = dataset(&[None, None]);
        assert!(filter_by_year(&ds, (i32::MIN, i32::MAX)).is_empty());
    }

    #[test]
    fn inverted_interval_selects_nothing() {
        let ds = dataset(&[Some(2020), Some(2021)]);
        assert!(filter_by_year(&ds, (2021, 2020)).is_empty());
    }
}
