//! Population plan contracts and validation.
//!
//! A plan is the declarative form of the population policies: which fields
//! to skip, which to recurse into, how to read ambiguous temporal fields and
//! which lengths or scales to use.

pub mod errors;
pub mod load;
pub mod model;
pub mod schema;
pub mod validate;

pub use errors::{IssueSeverity, PlanError, Result, ValidationIssue, ValidationReport};
pub use load::{PlanFormat, load_plan, load_plan_str, parse_plan_document};
pub use model::{CompositeRule, FieldSelector, LengthOrScaleRule, Plan, TemporalRule};
pub use schema::plan_json_schema;
pub use validate::{ValidatedPlan, validate_plan, validate_plan_json, validate_plan_semantics};
