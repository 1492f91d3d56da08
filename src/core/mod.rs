pub mod builder;
pub mod error;
pub mod extract;
pub mod matrix;
pub mod relation;
pub mod table;
pub mod types;
