/// Data layer: table model, loading, schema binding, and summaries.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────┐
///   │ Dataset │  named columns of CellValue, immutable
///   └─────────┘
///        │
///        ├──► schema    recognised indicator columns → Schema
///        ├──► filter    complete-case rows for (x, y)
///        ├──► describe  count / mean / std / quartiles
///        └──► export    write back out as CSV
/// ```

pub mod describe;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
