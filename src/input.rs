pub mod buffer;
pub mod parser;
