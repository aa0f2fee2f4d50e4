pub mod boot;
pub mod console;
pub mod cycler;
pub mod log;
pub mod task;
