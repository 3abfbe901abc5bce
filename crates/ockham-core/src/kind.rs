//! Runtime type naming for failure kinds and dynamically typed values.

use std::any::{type_name, Any};

/// Strips the module path from a type name produced by [`std::any::type_name`].
///
/// Generic arguments are left untouched: `alloc::vec::Vec<core::num::ParseIntError>`
/// becomes `Vec<core::num::ParseIntError>`.
pub fn short_type_name(full: &str) -> &str {
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map_or(0, |idx| idx + 2);
    &full[start..]
}

/// A value whose concrete type is only known at runtime.
///
/// Implemented for every `T: Any`, so any owned value can be passed as
/// `&dyn AnyValue` and later downcast or reported by type name.
pub trait AnyValue: Any {
    /// Fully qualified name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Upcasts to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AnyValue for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
