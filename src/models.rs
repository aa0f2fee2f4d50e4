pub mod feature;
pub mod message;
pub mod plan;
pub mod types;
