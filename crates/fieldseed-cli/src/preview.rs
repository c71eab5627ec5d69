use serde::Serialize;
use serde_json::Value;

use fieldseed_populate::{FieldPopulator, Populate, PopulationReport, SkipReason};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Populated,
    Composite,
    Excluded,
    Unsupported,
}

#[derive(Debug, Serialize)]
pub struct PreviewField {
    pub name: &'static str,
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub value: Value,
}

/// A populated fixture, field by field in declaration order.
#[derive(Debug, Serialize)]
pub struct Preview {
    pub fixture: &'static str,
    pub seed: i64,
    pub fields: Vec<PreviewField>,
}

impl Preview {
    pub fn render_text(&self) -> String {
        let width = self
            .fields
            .iter()
            .map(|field| field.name.len())
            .max()
            .unwrap_or(0);
        let mut out = format!("{} (seed {})\n", self.fixture, self.seed);
        for field in &self.fields {
            let slot = match field.position {
                Some(position) => format!("#{position}"),
                None => "-".to_string(),
            };
            let value = match field.status {
                FieldStatus::Excluded => "(excluded)".to_string(),
                FieldStatus::Unsupported => "(unsupported)".to_string(),
                FieldStatus::Populated | FieldStatus::Composite => field.value.to_string(),
            };
            out.push_str(&format!("{slot:>4}  {:<width$}  {value}\n", field.name));
        }
        out
    }
}

/// Populates a fresh `T` and pairs each field with what happened to it.
pub fn preview<T>(
    fixture: &'static str,
    seed: i64,
    populator: &FieldPopulator,
) -> Result<Preview, CliError>
where
    T: Populate + Default + Serialize,
{
    let mut target = T::default();
    let report = populator.populate(seed, &mut target)?;
    let Value::Object(values) = serde_json::to_value(&target)? else {
        return Err(CliError::InvalidConfig(format!(
            "fixture {fixture} does not serialize to an object"
        )));
    };

    let fields = T::fields()
        .iter()
        .map(|descriptor| {
            let name = descriptor.name();
            PreviewField {
                name,
                status: status_of(&report, name),
                position: report.position_of(name),
                value: values.get(name).cloned().unwrap_or(Value::Null),
            }
        })
        .collect();

    Ok(Preview {
        fixture,
        seed,
        fields,
    })
}

fn status_of(report: &PopulationReport, name: &str) -> FieldStatus {
    match report.was_skipped(name) {
        Some(SkipReason::Excluded) => FieldStatus::Excluded,
        Some(SkipReason::Unsupported) => FieldStatus::Unsupported,
        None if report.nested(name).is_some() => FieldStatus::Composite,
        None => FieldStatus::Populated,
    }
}
