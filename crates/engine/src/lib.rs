//! Warren Engine library.
//!
//! ## Structure
//!
//! - `ports/` - trait boundaries for the data, UI, and admin collaborators
//! - `use_cases/` - navigation and combat orchestration
//! - `app/` - action dispatch and the game-mode state machine
//! - `adapters/` - reference implementations of the ports

pub mod adapters;
pub mod app;
pub mod ports;
pub mod use_cases;
