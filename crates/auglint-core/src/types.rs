use serde::Serialize;

/// The default value declared on a method parameter.
///
/// Python defaults are almost always simple literals; anything else is kept
/// as raw source text. Rendering matches Python's `str()` of the value so
/// violation messages read the same as the reflective checker this replaces:
/// `True`, `None`, bare string content without quotes.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Integer or float literal, kept as written (`0`, `0.5`, `1e-3`).
    Number(String),
    Bool(bool),
    /// String literal content, quotes and prefix stripped.
    Str(String),
    None,
    /// Any non-literal default expression, as written in source.
    Expr(String),
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultValue::Number(n) => f.write_str(n),
            DefaultValue::Bool(true) => f.write_str("True"),
            DefaultValue::Bool(false) => f.write_str("False"),
            DefaultValue::Str(s) => f.write_str(s),
            DefaultValue::None => f.write_str("None"),
            DefaultValue::Expr(e) => f.write_str(e),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A detected convention violation: a defaulted parameter on an apply-method
/// of a transform class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub class_name: String,
    pub method: String,
    pub parameter: String,
    pub default: DefaultValue,
    pub message: String,
    pub file: String,
    pub line: u32,
}

/// Errors that can occur during a scan. There is no recoverable-error path:
/// any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan root not found: {0}")]
    RootNotFound(String),

    #[error("scan root is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
