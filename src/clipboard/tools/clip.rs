//! Windows clip.exe clipboard tool.

use super::pipe::pipe_text;
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Windows clipboard tool using the built-in clip.exe.
pub struct Clip;

impl Clip {
    /// Create a new Clip tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Clip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Clip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("clip", &[], text)
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self::new()
    }
}
