//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub tool: CopyMethod,
}

impl CopyResult {
    pub fn new(tool: CopyMethod) -> Self {
        Self { tool }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!("Copied results to clipboard (via {})", self.tool.name())
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux Wayland
    WlCopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Windows clip.exe
    Clip,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Clip => "clip",
        }
    }
}
