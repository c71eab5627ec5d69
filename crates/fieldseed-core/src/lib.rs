//! Core contracts for fieldseed.
//!
//! This crate defines the closed value taxonomy, field and type metadata, the
//! synthesized value union and the static catalogs shared by the population
//! engine, the plan contracts and the CLI.

pub mod catalog;
pub mod category;
pub mod error;
pub mod field;
pub mod value;

pub use catalog::{Currency, Locale};
pub use category::{TemporalSemantics, ValueCategory};
pub use error::{Error, Result};
pub use field::{FieldInfo, TypeInfo, TypeShape, short_type_name};
pub use value::{Enumerated, FieldValue, OffsetTime, Value};

/// Current contract version for population plans.
pub const PLAN_VERSION: &str = "0.1";
