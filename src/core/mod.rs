pub mod action;
pub mod command;
pub mod effect;

pub use action::{Action, NotifyLevel};
pub use command::{parse_command, Command};
pub use effect::{dispatch, Effect};
