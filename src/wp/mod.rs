//! Everything that talks to the WordPress installation through wp-cli.

pub mod command;
pub mod extract;
pub mod runner;
pub mod site;

pub use command::WpCommand;
pub use runner::{CommandRunner, WpCliRunner};
