use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// The plan is rejected.
    Error,
    /// The plan loads, but some rule is redundant or surprising.
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        })
    }
}

/// One problem found in a plan document.
///
/// `code` is a stable snake_case identifier meant for tooling, `path` a JSON
/// pointer to the offending node and `hint` an optional suggested edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ValidationIssue {
    pub fn error(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(IssueSeverity::Error, code, path, message)
    }

    pub fn warning(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(IssueSeverity::Warning, code, path, message)
    }

    fn with_severity(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at '{}': {}",
            self.severity, self.code, self.path, self.message
        )
    }
}

/// Issues split by severity, each list in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Warnings alone never fail a plan.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Files the issue under its own severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            IssueSeverity::Error => self.errors.push(issue),
            IssueSeverity::Warning => self.warnings.push(issue),
        }
    }

    pub fn error_codes(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.code.as_str()).collect()
    }

    /// Errors first, then warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(&self.warnings)
    }
}

/// A plan that could not be read at all, or was read and rejected.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plan is not valid toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("plan schema does not compile: {0}")]
    Schema(String),
    #[error("cannot read plan: {0}")]
    Io(#[from] std::io::Error),
    #[error("no plan reader for '{0}' files")]
    UnsupportedFormat(String),
    #[error("plan rejected with {} error(s)", .0.errors.len())]
    Invalid(ValidationReport),
}

pub type Result<T> = std::result::Result<T, PlanError>;
