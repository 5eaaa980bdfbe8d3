/// Data layer: core types, loading, and trend derivation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TrendDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TrendDataset  │  Vec<TrendRecord>, distinct counties/indicators
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  filter by county+indicator → year-ordered points,
///   └──────────┘  percentage change first→last year
/// ```

pub mod loader;
pub mod model;
pub mod series;
