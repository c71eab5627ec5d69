use thiserror::Error;

use crate::category::ValueCategory;

/// Field-level failures raised while synthesizing or assigning a value.
#[derive(Debug, Error)]
pub enum Error {
    /// The field exposes no set capability.
    #[error("field `{field}` is read-only")]
    AccessDenied { field: &'static str },
    /// The synthesized value does not fit the declared Rust type.
    #[error("a {category} value cannot be stored in `{type_name}`")]
    TypeMismatch {
        category: ValueCategory,
        type_name: &'static str,
    },
    /// A composite field was requested for a type that cannot be default-constructed.
    #[error("type `{type_name}` has no default constructor")]
    NoDefaultConstructor { type_name: &'static str },
    /// The formula left the representable range of the target type.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
    /// A date or time component fell outside its calendar range.
    #[error("invalid temporal component: {0}")]
    InvalidComponent(String),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<time::error::ComponentRange> for Error {
    fn from(err: time::error::ComponentRange) -> Self {
        Error::InvalidComponent(err.to_string())
    }
}

/// Convenience alias for results returned by fieldseed crates.
pub type Result<T> = std::result::Result<T, Error>;
