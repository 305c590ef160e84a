//! Reference adapters for the engine's ports.

pub mod console;
pub mod memory;
pub mod world_file;

pub use console::{ConsoleUi, LoggingAdmin};
pub use memory::InMemoryWorld;
pub use world_file::WorldDefinition;
