//! # bienso
//!
//! Vietnamese vehicle registration plate parsing: classification into the
//! regulated plate categories, field extraction, and display formatting.
//!
//! A plate string is first reduced to its compact form (separators
//! stripped, letters upper-cased), then matched against an ordered table
//! of category rules. The result is a [`VietnamPlate`] whose variant
//! determines exactly which fields exist: no series on temporary plates,
//! no locality on military ones, a country numeral only on diplomatic
//! ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use bienso::{PlateCategory, VietnamPlate};
//!
//! let plate: VietnamPlate = "29A 433.74".parse().unwrap();
//! assert_eq!(plate.category(), PlateCategory::DomesticAutomobile);
//! assert_eq!(plate.locality(), Some("29"));
//! assert_eq!(plate.series(), Some("A"));
//! assert_eq!(plate.order(), "43374");
//! assert_eq!(plate.compact(), "29A43374");
//! assert_eq!(plate.to_string(), "29A-433.74");
//! ```
//!
//! ## Storage
//!
//! The compact form is the canonical storable key. The serde
//! implementation writes it on serialize and re-runs classification on
//! deserialize, so a stored value that no longer classifies surfaces as a
//! deserialization error rather than a silently inconsistent record.
//!
//! All operations are pure functions over an immutable, static rule
//! table; values can be shared across threads freely.

mod classify;
mod error;
mod format;
mod normalize;
pub mod series;
mod types;

pub use classify::classify;
pub use error::PlateError;
pub use normalize::normalize;
pub use types::{PlateCategory, VietnamPlate};
