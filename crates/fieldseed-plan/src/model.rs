use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use fieldseed_core::{FieldInfo, TemporalSemantics, TypeInfo, short_type_name};

/// Declarative population plan: a seed plus the rules that configure the
/// four population policies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Plan {
    /// Plan contract version.
    pub plan_version: String,
    /// Seed used when the caller does not supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Fields that are never populated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<FieldSelector>,
    /// Fields or types populated recursively as nested objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composite: Vec<CompositeRule>,
    /// Date/time semantics for ambiguous temporal fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temporal: Vec<TemporalRule>,
    /// Sequence length or decimal scale per field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub length_or_scale: Vec<LengthOrScaleRule>,
}

impl Plan {
    /// An empty plan: every policy keeps its default.
    pub fn empty() -> Self {
        Self {
            plan_version: fieldseed_core::PLAN_VERSION.to_string(),
            seed: None,
            exclude: Vec::new(),
            composite: Vec::new(),
            temporal: Vec::new(),
            length_or_scale: Vec::new(),
        }
    }

    pub fn is_excluded(&self, field: &FieldInfo) -> bool {
        self.exclude.iter().any(|selector| selector.matches(field))
    }

    pub fn is_composite(&self, field: &FieldInfo, ty: &TypeInfo) -> bool {
        self.composite.iter().any(|rule| rule.matches(field, ty))
    }

    /// Last matching temporal rule, if any.
    pub fn temporal_for(&self, field: &FieldInfo) -> Option<TemporalSemantics> {
        self.temporal
            .iter()
            .rev()
            .find(|rule| rule.selector.matches(field))
            .map(|rule| rule.semantics)
    }

    /// Last matching length-or-scale rule, if any.
    pub fn length_or_scale_for(&self, field: &FieldInfo) -> Option<u32> {
        self.length_or_scale
            .iter()
            .rev()
            .find(|rule| rule.selector.matches(field))
            .map(|rule| rule.value)
    }
}

/// Selects a field by name, optionally scoped to its declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FieldSelector {
    /// Field name as declared.
    pub field: String,
    /// Declaring type: either its full path or its bare name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl FieldSelector {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            owner: None,
        }
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn matches(&self, field: &FieldInfo) -> bool {
        self.field == field.name
            && self
                .owner
                .as_deref()
                .is_none_or(|owner| type_name_matches(owner, field.owner))
    }
}

/// Marks fields as composite. Every selector that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompositeRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Declared type of the field: either its full path or its bare name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl CompositeRule {
    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.owner.is_none() && self.type_name.is_none()
    }

    pub fn matches(&self, field: &FieldInfo, ty: &TypeInfo) -> bool {
        if self.is_empty() {
            return false;
        }
        self.field.as_deref().is_none_or(|name| name == field.name)
            && self
                .owner
                .as_deref()
                .is_none_or(|owner| type_name_matches(owner, field.owner))
            && self
                .type_name
                .as_deref()
                .is_none_or(|name| type_name_matches(name, ty.name))
    }
}

/// Resolves an ambiguous temporal field to date, time or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TemporalRule {
    #[serde(flatten)]
    pub selector: FieldSelector,
    pub semantics: TemporalSemantics,
}

/// Length of a string/array field or scale of a decimal field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LengthOrScaleRule {
    #[serde(flatten)]
    pub selector: FieldSelector,
    pub value: u32,
}

/// `wanted` names `actual` by its full path or by its bare name.
pub(crate) fn type_name_matches(wanted: &str, actual: &str) -> bool {
    wanted == actual || wanted == short_type_name(actual)
}
