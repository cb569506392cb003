pub mod relation;
pub mod value;
