//! Parsing of index management commands. The entry point is
//! [`parse_create_command`], which turns a flat argument vector into a
//! validated [`shoal_types::IndexSchema`].

mod create;
mod cursor;
mod decode;
mod error;
mod field;
mod global;
mod text_options;
mod vector;

pub use create::parse_create_command;
pub use error::CreateIndexError;
