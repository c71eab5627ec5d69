use std::any::type_name;
use std::fmt;

use fieldseed_core::{Enumerated, Error, FieldInfo, FieldValue, TypeInfo, Value};

use crate::engine::FieldPopulator;
use crate::errors::{FieldFailure, PopulateError};
use crate::model::PopulationReport;

/// A type whose fields can be deterministically populated.
///
/// `fields` lists the type's own fields in declaration order. The order is
/// part of the contract: positions, and therefore values, follow it.
///
/// ```
/// use fieldseed_populate::{FieldDescriptor, Populate};
///
/// #[derive(Default)]
/// struct Sample {
///     code: i8,
///     label: String,
/// }
///
/// impl Populate for Sample {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![
///             FieldDescriptor::value("code", |s: &mut Sample| &mut s.code),
///             FieldDescriptor::value("label", |s: &mut Sample| &mut s.label),
///         ]
///     }
/// }
/// ```
pub trait Populate: Sized + 'static {
    fn fields() -> Vec<FieldDescriptor<Self>>;
}

type AssignFn<T> = Box<dyn Fn(&mut T, Value) -> fieldseed_core::Result<()>>;
type NestFn<T> =
    Box<dyn Fn(&mut T, i64, &FieldPopulator) -> Result<PopulationReport, PopulateError>>;

enum Access<T> {
    Assign(AssignFn<T>),
    Nest(NestFn<T>),
    ReadOnly,
    Opaque,
}

/// Metadata plus the typed set capability of one field of `T`.
pub struct FieldDescriptor<T> {
    info: FieldInfo,
    access: Access<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// A scalar field of a supported category.
    pub fn value<V, F>(name: &'static str, accessor: F) -> Self
    where
        V: FieldValue,
        F: Fn(&mut T) -> &mut V + 'static,
    {
        let assign = move |target: &mut T, value: Value| -> fieldseed_core::Result<()> {
            let category = value.category();
            let value = V::from_value(value).ok_or(Error::TypeMismatch {
                category,
                type_name: type_name::<V>(),
            })?;
            *accessor(target) = value;
            Ok(())
        };
        Self {
            info: FieldInfo::new(name, type_name::<T>(), TypeInfo::of::<V>()),
            access: Access::Assign(Box::new(assign)),
        }
    }

    /// An enum field; the value is one of `E::CONSTANTS`.
    pub fn enumerated<E, F>(name: &'static str, accessor: F) -> Self
    where
        E: Enumerated,
        F: Fn(&mut T) -> &mut E + 'static,
    {
        let assign = move |target: &mut T, value: Value| -> fieldseed_core::Result<()> {
            let category = value.category();
            let constant = match value {
                Value::Enumerated(idx) => E::CONSTANTS.get(idx).cloned(),
                _ => None,
            };
            let constant = constant.ok_or(Error::TypeMismatch {
                category,
                type_name: type_name::<E>(),
            })?;
            *accessor(target) = constant;
            Ok(())
        };
        Self {
            info: FieldInfo::new(name, type_name::<T>(), TypeInfo::enumerated::<E>()),
            access: Access::Assign(Box::new(assign)),
        }
    }

    /// A nested object, populated recursively when the composite policy
    /// selects it. A fresh `C::default()` replaces the current value.
    pub fn composite<C, F>(name: &'static str, accessor: F) -> Self
    where
        C: Populate + Default,
        F: Fn(&mut T) -> &mut C + 'static,
    {
        let nest = move |target: &mut T, seed: i64, populator: &FieldPopulator| {
            let mut nested = C::default();
            let report = populator.populate(seed, &mut nested)?;
            *accessor(target) = nested;
            Ok::<_, PopulateError>(report)
        };
        Self {
            info: FieldInfo::new(name, type_name::<T>(), TypeInfo::composite::<C>()),
            access: Access::Nest(Box::new(nest)),
        }
    }

    /// A field of a type outside the supported categories that cannot be
    /// constructed by the engine. It is skipped unless the composite policy
    /// selects it, in which case population fails.
    pub fn opaque<V: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            info: FieldInfo::new(name, type_name::<T>(), TypeInfo::opaque::<V>()),
            access: Access::Opaque,
        }
    }

    /// A field of a supported type that denies mutation.
    pub fn read_only<V: FieldValue>(name: &'static str) -> Self {
        Self {
            info: FieldInfo::new(name, type_name::<T>(), TypeInfo::of::<V>()),
            access: Access::ReadOnly,
        }
    }

    pub fn info(&self) -> &FieldInfo {
        &self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub(crate) fn assign(&self, target: &mut T, value: Value) -> fieldseed_core::Result<()> {
        match &self.access {
            Access::Assign(assign) => assign(target, value),
            Access::ReadOnly => Err(Error::AccessDenied {
                field: self.info.name,
            }),
            Access::Nest(_) | Access::Opaque => Err(Error::TypeMismatch {
                category: value.category(),
                type_name: self.info.ty.name,
            }),
        }
    }

    pub(crate) fn populate_nested(
        &self,
        target: &mut T,
        seed: i64,
        populator: &FieldPopulator,
    ) -> Result<PopulationReport, FieldFailure> {
        match &self.access {
            Access::Nest(nest) => {
                nest(target, seed, populator).map_err(|err| FieldFailure::Nested(Box::new(err)))
            }
            Access::ReadOnly => Err(Error::AccessDenied {
                field: self.info.name,
            }
            .into()),
            Access::Assign(_) | Access::Opaque => Err(Error::NoDefaultConstructor {
                type_name: self.info.ty.name,
            }
            .into()),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            Access::Assign(_) => "assign",
            Access::Nest(_) => "nest",
            Access::ReadOnly => "read_only",
            Access::Opaque => "opaque",
        };
        f.debug_struct("FieldDescriptor")
            .field("info", &self.info)
            .field("access", &access)
            .finish()
    }
}

/// Looks up one of `T`'s own fields by name.
pub fn field_named<T: Populate>(name: &str) -> Option<FieldDescriptor<T>> {
    T::fields().into_iter().find(|field| field.name() == name)
}
