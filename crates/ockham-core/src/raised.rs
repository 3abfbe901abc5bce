//! Failures produced by actions under test.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;

use crate::errors::BoxError;
use crate::kind::short_type_name;

/// A failure raised by an action under test.
///
/// Any `E: Error + Send + Sync + 'static` converts into `Raised`, so actions
/// can use `?` directly. The concrete type of `E` is recorded at conversion
/// time; [`Raised::is`] and [`Raised::downcast_ref`] test exact type identity.
pub struct Raised {
    type_name: &'static str,
    error: BoxError,
}

impl<E> From<E> for Raised
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self {
            type_name: type_name::<E>(),
            error: Box::new(error),
        }
    }
}

impl Raised {
    /// Fully qualified type name of the raised error.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name without its module path, e.g. `ParseIntError`.
    pub fn kind_name(&self) -> &'static str {
        short_type_name(self.type_name)
    }

    /// The message of the raised error, as rendered by `Display`.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Returns `true` when the raised error is exactly of type `K`.
    pub fn is<K>(&self) -> bool
    where
        K: StdError + 'static,
    {
        self.error.is::<K>()
    }

    /// Returns the raised error as `K` when it is exactly of that type.
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: StdError + 'static,
    {
        self.error.downcast_ref::<K>()
    }

    /// Releases the boxed error, e.g. to chain it as a cause.
    pub fn into_inner(self) -> BoxError {
        self.error
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raised")
            .field("kind", &self.type_name)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind_name(), self.error)
    }
}
