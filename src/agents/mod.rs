pub mod command_execution;

pub use command_execution::{CommandExecutionAgent, CommandOutput, CommandRunner};
