/// Data layer: core types, loading, cleaning, filtering, aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  sentinels, date → year, word count
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PaperDataset  │  Vec<Paper>, schema flags, year bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌─────────────┐
///   │  filter   │ ───▶ │  aggregate   │  histogram, top-N, tokens
///   └──────────┘      └─────────────┘
/// ```
pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
