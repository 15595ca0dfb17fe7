//! System clipboard access for exported results.
//!
//! Text is piped into whichever platform tool is installed; nothing here
//! links against a windowing system.

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
