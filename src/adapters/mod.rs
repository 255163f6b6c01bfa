// Adapters layer: concrete implementations of the domain ports and output sinks.

pub mod compose_file;
pub mod output;

pub use compose_file::{ComposeFile, DEFAULT_COMPOSE_FILE};
