//! Error types and handling for the `tenki` weather page

use thiserror::Error;

/// Main error type for the `tenki` application
#[derive(Error, Debug)]
pub enum TenkiError {
    /// Geocoding returned no match for the query
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// Network failure, timeout or non-success upstream status
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Anything else going wrong while building a page, malformed payloads included
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Template loading or rendering errors
    #[error("Template error: {message}")]
    Template { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TenkiError {
    /// Create a new not-found error for a city query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new unexpected error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(message: S) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Message shown on the rendered page
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TenkiError::NotFound { query } => format!("場所『{query}』が見つかりませんでした。"),
            TenkiError::Transport { message } => format!("API通信でエラー: {message}"),
            TenkiError::Unexpected { message } => format!("想定外のエラー: {message}"),
            TenkiError::Config { message } => format!("設定エラー: {message}"),
            TenkiError::Template { message } => format!("表示エラー: {message}"),
            TenkiError::Io { source } => format!("想定外のエラー: {source}"),
        }
    }
}

impl From<reqwest::Error> for TenkiError {
    fn from(err: reqwest::Error) -> Self {
        // A body that arrived but does not decode is a payload problem, not a transport one
        if err.is_decode() {
            Self::unexpected(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<tera::Error> for TenkiError {
    fn from(err: tera::Error) -> Self {
        Self::template(err.to_string())
    }
}
