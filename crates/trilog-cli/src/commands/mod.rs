pub mod find;
pub mod log;
