use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// network failure, timeout or a non-2xx status
    Fetch(reqwest::Error),
    /// the homepage has no usable menu image
    NotFound(parse::Error),
    ImageProcessing {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    Json(serde_json::Error),
}

impl Error {
    pub fn image_processing(
        message: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ImageProcessing {
            message: message.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::NotFound(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Fetch(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(e) => write!(f, "Fetch error: {}", e),
            Error::NotFound(e) => write!(f, "Not found: {}", e),
            Error::ImageProcessing { message, source } => write!(f, "{}: {}", message, source),
            Error::Json(e) => write!(f, "Json error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(e) => Some(e),
            Error::NotFound(e) => Some(e),
            Error::ImageProcessing { source, .. } => Some(source.as_ref()),
            Error::Json(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
