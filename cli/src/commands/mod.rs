pub mod convert;
pub mod eval;
