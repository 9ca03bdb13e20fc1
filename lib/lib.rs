//! `stackgen` library.

pub mod macros;

pub mod commands;
pub mod compose;
pub mod concise;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod output;
pub mod prompt;
pub mod suggest;
pub mod writer;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use compose::*;
pub use concise::Output;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use handlers::*;
pub use output::*;
pub use writer::*;
