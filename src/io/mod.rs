pub mod csv;
pub mod input;
pub mod json;
