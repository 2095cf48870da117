use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A palette was asked to contain (or remove) itself.
    #[error("palette '{name}' cannot contain itself")]
    #[diagnostic(code(swatch::current_palette))]
    CurrentPalette {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("no palette found at '{path}'")]
    #[diagnostic(code(swatch::not_found))]
    NotFound {
        path: String,
        #[help]
        help: Option<String>,
    },

    #[error("a palette named '{name}' already exists")]
    #[diagnostic(code(swatch::duplicate))]
    Duplicate {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(swatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Bad command-line input, caught before any palette is touched.
    #[error("{message}")]
    #[diagnostic(code(swatch::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
