//! Custom extractors.

mod validated;

pub use validated::{Validated, ValidatedRequest};
