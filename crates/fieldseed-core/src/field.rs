use std::any::type_name;

use crate::category::ValueCategory;
use crate::value::{Enumerated, FieldValue};

/// How a declared type relates to the closed category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// A scalar of a supported category.
    Scalar(ValueCategory),
    /// An enum with `constants` declared variants.
    Enumerated { constants: usize },
    /// A nested type that can be default-constructed and populated.
    Composite,
    /// Anything else: unsupported and not constructible.
    Opaque,
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub shape: TypeShape,
}

impl TypeInfo {
    pub fn of<V: FieldValue>() -> Self {
        Self {
            name: type_name::<V>(),
            shape: TypeShape::Scalar(V::CATEGORY),
        }
    }

    pub fn enumerated<E: Enumerated>() -> Self {
        Self {
            name: type_name::<E>(),
            shape: TypeShape::Enumerated {
                constants: E::CONSTANTS.len(),
            },
        }
    }

    pub fn composite<C: 'static>() -> Self {
        Self {
            name: type_name::<C>(),
            shape: TypeShape::Composite,
        }
    }

    pub fn opaque<V: ?Sized + 'static>() -> Self {
        Self {
            name: type_name::<V>(),
            shape: TypeShape::Opaque,
        }
    }

    /// Whether this type belongs to `category`.
    pub fn admits(&self, category: ValueCategory) -> bool {
        match self.shape {
            TypeShape::Scalar(own) => own == category,
            TypeShape::Enumerated { .. } => category == ValueCategory::Enumerated,
            TypeShape::Composite | TypeShape::Opaque => false,
        }
    }

    /// Category this type would be synthesized as, if any.
    pub fn category(&self) -> Option<ValueCategory> {
        ValueCategory::DISPATCH_ORDER
            .into_iter()
            .find(|category| self.admits(*category))
    }

    /// Number of enum constants, for enumerated types.
    pub fn constants(&self) -> Option<usize> {
        match self.shape {
            TypeShape::Enumerated { constants } => Some(constants),
            _ => None,
        }
    }

    /// Short type name without its module path.
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

/// Read-only description of one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    /// Full type path of the type that declares the field.
    pub owner: &'static str,
    pub ty: TypeInfo,
}

impl FieldInfo {
    pub fn new(name: &'static str, owner: &'static str, ty: TypeInfo) -> Self {
        Self { name, owner, ty }
    }

    pub fn category(&self) -> Option<ValueCategory> {
        self.ty.category()
    }

    /// `Owner.field` with the owner's module path stripped.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", short_type_name(self.owner), self.name)
    }
}

/// Strips the module path of the outermost type; generic arguments are left as is.
pub fn short_type_name(full: &str) -> &str {
    let head = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
