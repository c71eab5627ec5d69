use std::fmt;
use std::sync::Arc;

use fieldseed_core::{FieldInfo, TemporalSemantics, TypeInfo, ValueCategory};
use fieldseed_plan::Plan;

/// Default decimal scale.
pub const DEFAULT_DECIMAL_SCALE: usize = 4;
/// Default length of strings and fixed-length sequences.
pub const DEFAULT_LENGTH: usize = 20;

pub type ExclusionPolicy = dyn Fn(&FieldInfo) -> bool + Send + Sync;
pub type CompositePolicy = dyn Fn(&FieldInfo, &TypeInfo) -> bool + Send + Sync;
pub type TemporalPolicy = dyn Fn(&FieldInfo) -> TemporalSemantics + Send + Sync;
pub type LengthOrScalePolicy = dyn Fn(&FieldInfo) -> usize + Send + Sync;

/// The four decision functions that steer a population pass.
///
/// Unset members fall back to their defaults: nothing is excluded, nothing is
/// composite, ambiguous temporal fields are timestamps, decimals get scale 4
/// and every other sized field length 20. The same set is handed unchanged
/// to every nested composite.
///
/// Policies must be pure; the engine calls them any number of times and
/// relies on identical answers for identical fields.
#[derive(Clone, Default)]
pub struct PopulationPolicies {
    exclude: Option<Arc<ExclusionPolicy>>,
    composite: Option<Arc<CompositePolicy>>,
    temporal: Option<Arc<TemporalPolicy>>,
    length_or_scale: Option<Arc<LengthOrScalePolicy>>,
}

impl PopulationPolicies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclusion<F>(mut self, policy: F) -> Self
    where
        F: Fn(&FieldInfo) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Arc::new(policy));
        self
    }

    pub fn with_composite<F>(mut self, policy: F) -> Self
    where
        F: Fn(&FieldInfo, &TypeInfo) -> bool + Send + Sync + 'static,
    {
        self.composite = Some(Arc::new(policy));
        self
    }

    pub fn with_temporal_resolver<F>(mut self, policy: F) -> Self
    where
        F: Fn(&FieldInfo) -> TemporalSemantics + Send + Sync + 'static,
    {
        self.temporal = Some(Arc::new(policy));
        self
    }

    pub fn with_length_or_scale<F>(mut self, policy: F) -> Self
    where
        F: Fn(&FieldInfo) -> usize + Send + Sync + 'static,
    {
        self.length_or_scale = Some(Arc::new(policy));
        self
    }

    /// Compile a plan into policies. Fields the plan says nothing about keep
    /// the defaults.
    pub fn from_plan(plan: &Plan) -> Self {
        let mut policies = Self::default();
        if !plan.exclude.is_empty() {
            let plan = plan.clone();
            policies = policies.with_exclusion(move |field| plan.is_excluded(field));
        }
        if !plan.composite.is_empty() {
            let plan = plan.clone();
            policies = policies.with_composite(move |field, ty| plan.is_composite(field, ty));
        }
        if !plan.temporal.is_empty() {
            let plan = plan.clone();
            policies = policies.with_temporal_resolver(move |field| {
                plan.temporal_for(field).unwrap_or_default()
            });
        }
        if !plan.length_or_scale.is_empty() {
            let plan = plan.clone();
            policies = policies.with_length_or_scale(move |field| {
                plan.length_or_scale_for(field)
                    .map(|value| value as usize)
                    .unwrap_or_else(|| default_length_or_scale(field))
            });
        }
        policies
    }

    pub fn excludes(&self, field: &FieldInfo) -> bool {
        self.exclude.as_ref().is_some_and(|policy| policy(field))
    }

    pub fn is_composite(&self, field: &FieldInfo, ty: &TypeInfo) -> bool {
        self.composite.as_ref().is_some_and(|policy| policy(field, ty))
    }

    pub fn temporal_semantics(&self, field: &FieldInfo) -> TemporalSemantics {
        match &self.temporal {
            Some(policy) => policy(field),
            None => TemporalSemantics::default(),
        }
    }

    pub fn length_or_scale(&self, field: &FieldInfo) -> usize {
        match &self.length_or_scale {
            Some(policy) => policy(field),
            None => default_length_or_scale(field),
        }
    }
}

impl fmt::Debug for PopulationPolicies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = |set: bool| if set { "custom" } else { "default" };
        f.debug_struct("PopulationPolicies")
            .field("exclude", &state(self.exclude.is_some()))
            .field("composite", &state(self.composite.is_some()))
            .field("temporal", &state(self.temporal.is_some()))
            .field("length_or_scale", &state(self.length_or_scale.is_some()))
            .finish()
    }
}

/// Scale 4 for decimals, length 20 for everything else.
pub fn default_length_or_scale(field: &FieldInfo) -> usize {
    if field.category() == Some(ValueCategory::Decimal) {
        DEFAULT_DECIMAL_SCALE
    } else {
        DEFAULT_LENGTH
    }
}
