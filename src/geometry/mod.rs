mod canonical;
mod form;

pub use canonical::CanonicalLine;
pub use form::{FormKind, InputForm};
