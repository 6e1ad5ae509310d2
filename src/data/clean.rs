use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::model::Paper;

// ---------------------------------------------------------------------------
// RawPaper – one row as read from the file, before cleaning
// ---------------------------------------------------------------------------

/// A raw row. `None` means the cell was absent; empty strings are treated
/// the same way during cleaning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaper {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
    #[serde(default, rename = "source_x")]
    pub source: Option<String>,
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Sentinel substituted for a missing title.
pub const MISSING_TITLE: &str = "No Title";
/// Sentinel substituted for a missing journal.
pub const MISSING_JOURNAL: &str = "Unknown Journal";

/// Clean a raw row. Never fails: missing text fields become sentinels and
/// unparsable dates become a missing year.
pub fn clean(raw: RawPaper) -> Paper {
    let title = non_empty(raw.title).unwrap_or_else(|| MISSING_TITLE.to_string());
    let abstract_text = non_empty(raw.abstract_text).unwrap_or_default();
    let journal = non_empty(raw.journal).unwrap_or_else(|| MISSING_JOURNAL.to_string());
    let source = non_empty(raw.source);

    let publish_time = raw
        .publish_time
        .as_deref()
        .and_then(parse_publish_time);
    let year = publish_time.map(|d| d.year());
    let abstract_word_count = abstract_text.split_whitespace().count();

    Paper {
        title,
        abstract_text,
        journal,
        publish_time,
        year,
        abstract_word_count,
        source,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Date formats observed in the metadata dumps, most specific first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y %b %d", "%d %b %Y"];

/// Parse a `publish_time` cell. Full dates are tried against the known
/// formats; year-month ("2020-03") and bare-year ("2020") values round down
/// to the first day, matching how the upstream dumps are usually coerced.
/// Anything else is missing, not an error.
pub fn parse_publish_time(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    if let Some((year, month)) = value.split_once('-') {
        if let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) {
            return NaiveDate::from_ymd_opt(year, month, 1);
        }
    }

    if value.len() == 4 {
        if let Ok(year) = value.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_date_shapes() {
        assert_eq!(
            parse_publish_time("2020-03-14"),
            NaiveDate::from_ymd_opt(2020, 3, 14)
        );
        assert_eq!(
            parse_publish_time("2020 Mar 14"),
            NaiveDate::from_ymd_opt(2020, 3, 14)
        );
        assert_eq!(
            parse_publish_time("2020-03"),
            NaiveDate::from_ymd_opt(2020, 3, 1)
        );
        assert_eq!(
            parse_publish_time("2020"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn unparsable_dates_become_missing() {
        assert_eq!(parse_publish_time(""), None);
        assert_eq!(parse_publish_time("n.d."), None);
        assert_eq!(parse_publish_time("2020-13"), None);
        assert_eq!(parse_publish_time("sometime in spring"), None);
    }

    #[test]
    fn missing_fields_get_sentinels() {
        let paper = clean(RawPaper::default());
        assert_eq!(paper.title, "No Title");
        assert_eq!(paper.abstract_text, "");
        assert_eq!(paper.journal, "Unknown Journal");
        assert_eq!(paper.year, None);
        assert_eq!(paper.abstract_word_count, 0);
        assert_eq!(paper.source, None);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let paper = clean(RawPaper {
            title: Some("  ".to_string()),
            journal: Some(String::new()),
            ..RawPaper::default()
        });
        assert_eq!(paper.title, "No Title");
        assert_eq!(paper.journal, "Unknown Journal");
    }

    #[test]
    fn derives_year_and_word_count() {
        let paper = clean(RawPaper {
            title: Some("Viral load dynamics".to_string()),
            abstract_text: Some("We measured viral load over time.".to_string()),
            journal: Some("The Lancet".to_string()),
            publish_time: Some("2021-06-01".to_string()),
            source: Some("PMC".to_string()),
        });
        assert_eq!(paper.year, Some(2021));
        assert_eq!(paper.abstract_word_count, 6);
        assert_eq!(paper.source.as_deref(), Some("PMC"));
    }
}
