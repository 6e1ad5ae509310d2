use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Paper – one cleaned row of the metadata table
// ---------------------------------------------------------------------------

/// A single paper record after cleaning: sentinel-substituted text fields
/// plus the derived `year` and `abstract_word_count` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    /// Paper title ("No Title" when the source cell was empty).
    pub title: String,
    /// Abstract text (empty string when the source cell was empty).
    pub abstract_text: String,
    /// Journal name ("Unknown Journal" when the source cell was empty).
    pub journal: String,
    /// Parsed publication date; `None` when `publish_time` was absent or
    /// unparsable.
    pub publish_time: Option<NaiveDate>,
    /// Publication year, taken from `publish_time`.
    pub year: Option<i32>,
    /// Number of whitespace-separated tokens in the abstract.
    pub abstract_word_count: usize,
    /// Source collection (`source_x` column); `None` when the cell was empty
    /// or the column is absent from the file.
    pub source: Option<String>,
}

// ---------------------------------------------------------------------------
// PaperDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Name of the optional source-collection column.
pub const SOURCE_COLUMN: &str = "source_x";

/// The full cleaned dataset. Built exactly once per load, then handed out
/// read-only; every aggregator works from a shared borrow of this value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperDataset {
    /// All cleaned records (rows).
    pub papers: Vec<Paper>,
    /// Column names of the raw file, in file order.
    pub column_names: Vec<String>,
    /// Whether the raw schema carries a `source_x` column. Checked once at
    /// load time; the source-distribution view is skipped when false.
    pub has_source: bool,
    /// Observed `(min, max)` over all known publication years; `None` when
    /// no row has a parsable date.
    pub year_bounds: Option<(i32, i32)>,
}

impl PaperDataset {
    /// Build the dataset index from cleaned rows and the raw header.
    pub fn new(papers: Vec<Paper>, column_names: Vec<String>) -> Self {
        let has_source = column_names.iter().any(|c| c == SOURCE_COLUMN);

        let mut year_bounds: Option<(i32, i32)> = None;
        for year in papers.iter().filter_map(|p| p.year) {
            year_bounds = Some(match year_bounds {
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
                None => (year, year),
            });
        }

        PaperDataset {
            papers,
            column_names,
            has_source,
            year_bounds,
        }
    }

    /// Number of papers.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(year: Option<i32>) -> Paper {
        Paper {
            title: "t".to_string(),
            abstract_text: String::new(),
            journal: "j".to_string(),
            publish_time: year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
            year,
            abstract_word_count: 0,
            source: None,
        }
    }

    #[test]
    fn year_bounds_span_known_years_only() {
        let ds = PaperDataset::new(
            vec![paper(Some(2019)), paper(None), paper(Some(2022))],
            vec!["title".into()],
        );
        assert_eq!(ds.year_bounds, Some((2019, 2022)));
    }

    #[test]
    fn year_bounds_none_without_dates() {
        let ds = PaperDataset::new(vec![paper(None)], vec!["title".into()]);
        assert_eq!(ds.year_bounds, None);
    }

    #[test]
    fn has_source_reflects_raw_header() {
        let with = PaperDataset::new(vec![], vec!["title".into(), "source_x".into()]);
        assert!(with.has_source);

        let without = PaperDataset::new(vec![], vec!["title".into()]);
        assert!(!without.has_source);
    }
}
