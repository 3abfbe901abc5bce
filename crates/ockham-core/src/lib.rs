#![deny(missing_docs)]
#![doc = "Failure vocabulary shared by the Ockham assertion helpers."]

pub mod errors;
pub mod kind;
pub mod raised;

pub use errors::{codes, AssertionError, BoxError, ErrorInfo};
pub use kind::{short_type_name, AnyValue};
pub use raised::Raised;
