use fieldseed_core::{FieldInfo, ValueCategory};

use crate::policy::PopulationPolicies;

/// What the engine will do with one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Excluded,
    Synthesize(ValueCategory),
    Composite,
    Unsupported,
}

/// Routes a field through the exclusion check, the ordered category list
/// and finally the composite predicate.
///
/// The composite predicate is only consulted when no category matched, so a
/// supported scalar can never be recursed into.
pub fn dispatch(field: &FieldInfo, policies: &PopulationPolicies) -> Dispatch {
    if policies.excludes(field) {
        return Dispatch::Excluded;
    }
    if let Some(category) = field.category() {
        return Dispatch::Synthesize(category);
    }
    if policies.is_composite(field, &field.ty) {
        Dispatch::Composite
    } else {
        Dispatch::Unsupported
    }
}
