//! Economic Dataset
//!
//! Loads the per-country GDP table once at startup and answers
//! year filters against it.
//!
//! - **types**: `EconomicRecord`, `YearRange`
//! - **loader**: CSV parsing with header-based column lookup
//! - **table**: the immutable `Dataset` with its year index
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use africa_gdp_dashboard::dataset::DatasetLoader;
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::new().load(Path::new("africa_economics_v2.csv"))?;
//! let rows = dataset.filter_year(dataset.min_year());
//! println!("{} economies in {}", rows.len(), dataset.min_year());
//! # Ok::<(), africa_gdp_dashboard::dataset::DatasetError>(())
//! ```

pub mod error;
pub mod loader;
pub mod table;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{ColumnNames, DatasetLoader};
pub use table::Dataset;
pub use types::{cmp_gdp_desc, EconomicRecord, YearRange};
