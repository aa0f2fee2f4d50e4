pub mod ansi;
pub mod banner;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod state;
pub mod term;

// Convenient re-exports (so call sites can do `pulsenode::Console`, etc.)
pub use commands::{Command, process_command};
pub use models::message::{Message, Role};
pub use models::plan::{BillingCycle, PLANS, Plan, display_price};
pub use state::{console::Console, log::MessageLog, task::PeriodicTask};
