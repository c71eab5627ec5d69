use std::collections::HashSet;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::errors::{PlanError, ValidationIssue, ValidationReport};
use crate::model::{FieldSelector, Plan, type_name_matches};

/// Validated plan with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedPlan {
    pub plan: Plan,
    pub warnings: Vec<ValidationIssue>,
}

/// Validate a plan JSON document against the plan JSON Schema.
pub fn validate_plan_json(
    plan_json: &Value,
    plan_schema: &Value,
) -> Result<ValidationReport, PlanError> {
    let compiled =
        JSONSchema::compile(plan_schema).map_err(|err| PlanError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(plan_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push(ValidationIssue::error(
                "schema_violation",
                path,
                error.to_string(),
            ));
        }
    }

    Ok(report)
}

/// Semantic checks that the JSON Schema cannot express.
pub fn validate_plan_semantics(plan: &Plan) -> ValidationReport {
    let mut report = ValidationReport::default();

    if plan.plan_version != fieldseed_core::PLAN_VERSION {
        report.push(
            ValidationIssue::error(
                "plan_version_mismatch",
                "/plan_version",
                format!(
                    "plan_version '{}' is not supported (expected '{}')",
                    plan.plan_version,
                    fieldseed_core::PLAN_VERSION
                ),
            )
            .with_hint(format!(
                "set plan_version to '{}'",
                fieldseed_core::PLAN_VERSION
            )),
        );
    }

    validate_selectors(
        plan.exclude.iter(),
        |idx| format!("/exclude/{idx}"),
        &mut report,
    );
    validate_selectors(
        plan.temporal.iter().map(|rule| &rule.selector),
        |idx| format!("/temporal/{idx}"),
        &mut report,
    );
    validate_selectors(
        plan.length_or_scale.iter().map(|rule| &rule.selector),
        |idx| format!("/length_or_scale/{idx}"),
        &mut report,
    );

    for (idx, rule) in plan.composite.iter().enumerate() {
        if rule.is_empty() {
            report.push(
                ValidationIssue::error(
                    "composite_rule_empty",
                    format!("/composite/{idx}"),
                    "composite rule selects nothing",
                )
                .with_hint("set at least one of field, owner or type_name"),
            );
        }
        if let (Some(field), owner) = (&rule.field, &rule.owner) {
            let shadowed = plan.exclude.iter().any(|selector| {
                &selector.field == field
                    && match (selector.owner.as_deref(), owner.as_deref()) {
                        (None, _) => true,
                        (Some(excluded), Some(composite)) => same_owner(excluded, composite),
                        (Some(_), None) => false,
                    }
            });
            if shadowed {
                report.push(
                    ValidationIssue::warning(
                        "composite_field_excluded",
                        format!("/composite/{idx}/field"),
                        format!("field '{field}' is also excluded; exclusion wins"),
                    )
                    .with_hint("remove the field from either exclude or composite"),
                );
            }
        }
    }

    for (idx, rule) in plan.length_or_scale.iter().enumerate() {
        if rule.value == 0 {
            report.push(ValidationIssue::warning(
                "length_or_scale_zero",
                format!("/length_or_scale/{idx}/value"),
                "a zero length produces empty sequences and a zero scale integral decimals",
            ));
        }
    }

    report
}

/// Validate the plan end-to-end, returning structured issues on failure.
pub fn validate_plan(
    plan_json: &Value,
    plan_schema: &Value,
) -> Result<ValidatedPlan, ValidationReport> {
    let structural = match validate_plan_json(plan_json, plan_schema) {
        Ok(report) => report,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push(ValidationIssue::error(
                "schema_validation_error",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    if !structural.is_ok() {
        return Err(structural);
    }

    let plan: Plan = match serde_json::from_value(plan_json.clone()) {
        Ok(plan) => plan,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push(ValidationIssue::error(
                "invalid_plan_json",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    let semantic = validate_plan_semantics(&plan);
    if !semantic.is_ok() {
        return Err(semantic);
    }

    Ok(ValidatedPlan {
        plan,
        warnings: semantic.warnings,
    })
}

fn validate_selectors<'a>(
    selectors: impl Iterator<Item = &'a FieldSelector>,
    path: impl Fn(usize) -> String,
    report: &mut ValidationReport,
) {
    let mut seen = HashSet::new();
    for (idx, selector) in selectors.enumerate() {
        if selector.field.trim().is_empty() {
            report.push(ValidationIssue::error(
                "selector_empty",
                format!("{}/field", path(idx)),
                "field selector must name a field",
            ));
            continue;
        }
        if !seen.insert(selector) {
            report.push(
                ValidationIssue::warning(
                    "duplicate_selector",
                    path(idx),
                    format!("field '{}' is selected more than once", selector.field),
                )
                .with_hint("the last matching rule wins"),
            );
        }
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}

/// Owners written in a plan may use the full path or the bare name.
fn same_owner(left: &str, right: &str) -> bool {
    type_name_matches(left, right) || type_name_matches(right, left)
}
