//! Error types for document output and color lookup.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Save Errors
// ============================================================================

/// Errors that occur while writing a document to its destination
#[derive(Error, Diagnostic, Debug)]
pub enum SaveError {
    #[error("cannot open {} for writing", .path.display())]
    #[diagnostic(code(svgdoc::save::create))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing document to {}", .path.display())]
    #[diagnostic(code(svgdoc::save::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    /// Destination the document was being written to
    pub fn path(&self) -> &std::path::Path {
        match self {
            SaveError::Create { path, .. } | SaveError::Write { path, .. } => path,
        }
    }
}

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from looking up a color by name
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color name: {name}")]
    #[diagnostic(
        code(svgdoc::color::unknown_name),
        help("known names are Transparent, Aqua, Black, Blue, Brown, Cyan, Fuchsia, Green, Lime, Magenta, Orange, Purple, Red, Silver, White, Yellow")
    )]
    UnknownName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_error_reports_path() {
        let err = SaveError::Create {
            path: PathBuf::from("/nowhere/out.svg"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.path(), std::path::Path::new("/nowhere/out.svg"));
        assert_eq!(err.to_string(), "cannot open /nowhere/out.svg for writing");
    }

    #[test]
    fn color_error_message() {
        let err = ColorError::UnknownName {
            name: "Mauve".to_string(),
        };
        assert_eq!(err.to_string(), "unknown color name: Mauve");
    }
}
