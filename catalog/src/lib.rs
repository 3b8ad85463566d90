//! Course catalog for the Atelier art history app.
//!
//! The catalog is a read-only tree built once per process:
//!
//! - **Eras**: a fixed set of three historical periods
//! - **Regions** → **Schools** → **Painters**: the course tree of an era
//! - **Levels** → **Lessons** → **Rewards**: a painter's gamified path
//!
//! # Key Components
//!
//! - [`Catalog`]: assembled catalog with era and region lookup
//! - [`EraProvider`]: per-era built-in content
//! - [`CatalogIssue`]: structural rules checked when loading hand-authored data
//!
//! # Example
//!
//! ```
//! use catalog::{Catalog, EraId};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.get_regions(EraId::NineteenthCentury).len(), 1);
//! assert!(catalog.get_regions(EraId::Modern).is_empty());
//! ```

pub mod eras;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// Re-export main types
pub use eras::EraProvider;
pub use error::CatalogError;
pub use store::Catalog;
pub use types::*;
pub use validation::CatalogIssue;
