use thiserror::Error;

/// Errors emitted by the population engine.
#[derive(Debug, Error)]
pub enum PopulateError {
    /// A field could not be synthesized, constructed or assigned. Fields
    /// populated before it keep their new values.
    #[error("unable to populate field `{field}` of {object} (seed {seed}, position {position}): {source}")]
    Field {
        object: &'static str,
        field: &'static str,
        seed: i64,
        position: u32,
        #[source]
        source: FieldFailure,
    },
    #[error("unknown field `{field}` on {object}")]
    UnknownField {
        object: &'static str,
        field: String,
    },
}

impl PopulateError {
    /// Name of the outermost field that failed.
    pub fn field(&self) -> &str {
        match self {
            PopulateError::Field { field, .. } => *field,
            PopulateError::UnknownField { field, .. } => field.as_str(),
        }
    }

    /// Field names from the outermost object down to the field that actually
    /// failed.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        while let PopulateError::Field { field, source, .. } = current {
            path.push(*field);
            match source {
                FieldFailure::Nested(inner) => current = inner.as_ref(),
                FieldFailure::Value(_) => break,
            }
        }
        path
    }

    /// The innermost field-level failure, if any.
    pub fn root_cause(&self) -> Option<&fieldseed_core::Error> {
        match self {
            PopulateError::Field { source, .. } => match source {
                FieldFailure::Value(err) => Some(err),
                FieldFailure::Nested(inner) => inner.root_cause(),
            },
            PopulateError::UnknownField { .. } => None,
        }
    }
}

/// What went wrong inside a single field.
#[derive(Debug, Error)]
pub enum FieldFailure {
    #[error(transparent)]
    Value(#[from] fieldseed_core::Error),
    #[error("nested population failed: {0}")]
    Nested(Box<PopulateError>),
}
