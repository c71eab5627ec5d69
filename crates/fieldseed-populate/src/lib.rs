//! Deterministic field population engine.
//!
//! Given an object whose type implements [`Populate`] and an integer seed,
//! [`FieldPopulator`] walks the object's own fields, classifies each declared
//! type against the closed [`ValueCategory`](fieldseed_core::ValueCategory)
//! list and assigns a value that depends only on the seed and the field's
//! position. Nested objects are populated recursively under a derived seed
//! when the composite policy selects them.

pub mod context;
pub mod descriptor;
pub mod dispatch;
pub mod engine;
pub mod errors;
pub mod model;
pub mod policy;
pub mod synth;

pub use context::{GenerationContext, NESTED_SEED_STRIDE};
pub use descriptor::{FieldDescriptor, Populate, field_named};
pub use dispatch::{Dispatch, dispatch};
pub use engine::{FieldPopulator, populate, populate_with};
pub use errors::{FieldFailure, PopulateError};
pub use model::{FieldOutcome, PopulationReport, SkipReason, SkippedField};
pub use policy::{
    CompositePolicy, DEFAULT_DECIMAL_SCALE, DEFAULT_LENGTH, ExclusionPolicy, LengthOrScalePolicy,
    PopulationPolicies, TemporalPolicy,
};
pub use synth::synthesize;
