use std::path::Path;

use serde_json::Value;

use crate::errors::{PlanError, Result};
use crate::schema::plan_json_schema;
use crate::validate::{ValidatedPlan, validate_plan};

/// Supported on-disk plan encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Json,
    Toml,
}

impl PlanFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(PlanFormat::Json),
            Some("toml") => Ok(PlanFormat::Toml),
            _ => Err(PlanError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse plan text into a JSON document without validating it.
pub fn parse_plan_document(contents: &str, format: PlanFormat) -> Result<Value> {
    match format {
        PlanFormat::Json => Ok(serde_json::from_str(contents)?),
        PlanFormat::Toml => Ok(toml::from_str(contents)?),
    }
}

/// Parse and validate plan text against the generated plan schema.
pub fn load_plan_str(contents: &str, format: PlanFormat) -> Result<ValidatedPlan> {
    let document = parse_plan_document(contents, format)?;
    let schema = serde_json::to_value(plan_json_schema())?;
    validate_plan(&document, &schema).map_err(PlanError::Invalid)
}

/// Read, parse and validate a `.json` or `.toml` plan file.
pub fn load_plan(path: &Path) -> Result<ValidatedPlan> {
    let format = PlanFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    load_plan_str(&contents, format)
}
