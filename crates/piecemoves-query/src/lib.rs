//! Line-oriented query protocol over the piecemoves core.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::QueryError;
pub use session::Session;
