use miette::Diagnostic;
use thiserror::Error;

/// Main error type for compendium conversion
#[derive(Error, Diagnostic, Debug)]
pub enum CardError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(cards::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("XML error: {message}")]
    #[diagnostic(code(cards::xml))]
    Xml {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported compendium version '{found}' (supported: {supported})")]
    #[diagnostic(code(cards::version))]
    Version { found: String, supported: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(cards::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(cards::json))]
    Serialize(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    #[diagnostic(code(cards::encoding))]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Write error: {0}")]
    #[diagnostic(code(cards::write))]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
