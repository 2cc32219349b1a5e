use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    MenuImageNotFound,
    InvalidUrl(String),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl Error {
    pub fn invalid_url(src: &str, e: &url::ParseError) -> Self {
        Self::InvalidUrl(format!("{src}: {e}"))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MenuImageNotFound => write!(f, "Menu image not found on homepage."),
            Self::InvalidUrl(msg) => write!(f, "Invalid menu image url: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
