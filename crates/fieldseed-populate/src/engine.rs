use std::any::type_name;

use tracing::{debug, trace};

use crate::context::GenerationContext;
use crate::descriptor::{FieldDescriptor, Populate};
use crate::dispatch::{Dispatch, dispatch};
use crate::errors::{FieldFailure, PopulateError};
use crate::model::{FieldOutcome, PopulationReport, SkipReason};
use crate::policy::PopulationPolicies;
use crate::synth::synthesize;

/// Entry point for populating objects from a seed.
#[derive(Debug, Clone, Default)]
pub struct FieldPopulator {
    policies: PopulationPolicies,
}

impl FieldPopulator {
    pub fn new(policies: PopulationPolicies) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &PopulationPolicies {
        &self.policies
    }

    /// Populates every own field of `target` in declaration order.
    ///
    /// Positions are handed out only to fields that receive a value, so
    /// excluded and unsupported fields do not shift their successors. The
    /// first failure aborts the call; fields already written keep their
    /// values.
    pub fn populate<T: Populate>(
        &self,
        seed: i64,
        target: &mut T,
    ) -> Result<PopulationReport, PopulateError> {
        let fields = T::fields();
        debug!(
            seed,
            object = type_name::<T>(),
            fields = fields.len(),
            "population started"
        );

        let mut report = PopulationReport::new(seed);
        for descriptor in &fields {
            let position = report.next_position();
            let outcome = self.populate_field(target, descriptor, seed, position)?;
            report.record(descriptor.name(), outcome);
        }

        debug!(
            seed,
            object = type_name::<T>(),
            populated = report.populated.len(),
            skipped = report.skipped.len(),
            "population finished"
        );
        Ok(report)
    }

    /// Populates a single field at an explicit position, with the same
    /// formulas and policies as [`FieldPopulator::populate`].
    pub fn populate_field<T: 'static>(
        &self,
        target: &mut T,
        descriptor: &FieldDescriptor<T>,
        seed: i64,
        position: u32,
    ) -> Result<FieldOutcome, PopulateError> {
        let ctx = GenerationContext::new(seed, position);
        let field = descriptor.info();
        let decision = dispatch(field, &self.policies);
        trace!(field = field.name, position, ?decision, "field dispatched");

        let outcome = match decision {
            Dispatch::Excluded => FieldOutcome::Skipped(SkipReason::Excluded),
            Dispatch::Unsupported => FieldOutcome::Skipped(SkipReason::Unsupported),
            Dispatch::Synthesize(category) => {
                synthesize(category, ctx, field, &self.policies)
                    .and_then(|value| descriptor.assign(target, value))
                    .map_err(|err| with_context::<T>(descriptor, ctx, err.into()))?;
                FieldOutcome::Populated(category)
            }
            Dispatch::Composite => {
                let report = self
                    .populate_composite(target, descriptor, ctx)
                    .map_err(|err| with_context::<T>(descriptor, ctx, err))?;
                FieldOutcome::Composite(report)
            }
        };
        Ok(outcome)
    }

    /// Looks up `name` among `T`'s own fields and populates it.
    pub fn populate_named<T: Populate>(
        &self,
        target: &mut T,
        name: &str,
        seed: i64,
        position: u32,
    ) -> Result<FieldOutcome, PopulateError> {
        let descriptor = T::fields()
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| PopulateError::UnknownField {
                object: type_name::<T>(),
                field: name.to_string(),
            })?;
        self.populate_field(target, &descriptor, seed, position)
    }

    /// Builds a fresh nested object under the derived seed, sharing this
    /// populator's policies.
    fn populate_composite<T: 'static>(
        &self,
        target: &mut T,
        descriptor: &FieldDescriptor<T>,
        ctx: GenerationContext,
    ) -> Result<PopulationReport, FieldFailure> {
        let nested_seed = ctx.nested_seed();
        debug!(
            field = descriptor.name(),
            ty = descriptor.info().ty.name,
            seed = ctx.seed,
            nested_seed,
            "populating composite field"
        );
        descriptor.populate_nested(target, nested_seed, self)
    }
}

fn with_context<T: 'static>(
    descriptor: &FieldDescriptor<T>,
    ctx: GenerationContext,
    source: FieldFailure,
) -> PopulateError {
    PopulateError::Field {
        object: type_name::<T>(),
        field: descriptor.name(),
        seed: ctx.seed,
        position: ctx.position,
        source,
    }
}

/// Populates `target` with the default policies.
pub fn populate<T: Populate>(seed: i64, target: &mut T) -> Result<PopulationReport, PopulateError> {
    FieldPopulator::default().populate(seed, target)
}

/// Populates `target` with the given policies.
pub fn populate_with<T: Populate>(
    seed: i64,
    target: &mut T,
    policies: &PopulationPolicies,
) -> Result<PopulationReport, PopulateError> {
    FieldPopulator::new(policies.clone()).populate(seed, target)
}
