//! Text recognition for the menu image.
//!
//! An [`Extractor`] owns one [`OcrEngine`] for its whole lifetime, so engines
//! that load a model pay that cost once no matter how many images are read.

#[cfg(feature = "ocr-ocrs")]
mod ocrs_backend;
mod tesseract;

use std::{fmt::Display, str::FromStr};

use image::DynamicImage;
use reqwest::Client;
use url::Url;

use crate::{config::Config, fetch, Error};

#[cfg(feature = "ocr-ocrs")]
pub use ocrs_backend::OcrsEngine;
pub use tesseract::{TesseractEngine, DEFAULT_LANGUAGE};

#[derive(Debug)]
pub enum OcrError {
    BackendNotAvailable(String),
    Failed(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for OcrError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for OcrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BackendNotAvailable(msg) => write!(f, "OCR backend not available: {msg}"),
            Self::Failed(msg) => write!(f, "OCR failed: {msg}"),
            Self::Io(e) => write!(f, "OCR I/O error: {e}"),
        }
    }
}

impl std::error::Error for OcrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Text-only recognition: lines in the order the engine reports them, no
/// positions or confidences.
pub trait OcrEngine {
    fn name(&self) -> &'static str;

    fn recognize(&self, image: &DynamicImage) -> Result<Vec<String>, OcrError>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Backend {
    #[default]
    Tesseract,
    Ocrs,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tesseract" => Ok(Self::Tesseract),
            "ocrs" => Ok(Self::Ocrs),
            other => Err(format!("unknown OCR backend {other:?}")),
        }
    }
}

pub struct Extractor {
    engine: Box<dyn OcrEngine>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(TesseractEngine::default())
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl Extractor {
    pub fn new(engine: impl OcrEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let extractor = match config.ocr_backend {
            Backend::Tesseract => Self::new(TesseractEngine::new(&config.ocr_language)),
            #[cfg(feature = "ocr-ocrs")]
            Backend::Ocrs => {
                let dir = config.ocrs_models.as_deref().ok_or_else(|| {
                    Error::image_processing(
                        "Failed to initialise OCR engine",
                        OcrError::BackendNotAvailable(
                            "MENU_OCRS_MODELS is not set".to_string(),
                        ),
                    )
                })?;
                let engine = OcrsEngine::from_model_dir(dir)
                    .map_err(|e| Error::image_processing("Failed to initialise OCR engine", e))?;
                Self::new(engine)
            }
            #[cfg(not(feature = "ocr-ocrs"))]
            Backend::Ocrs => {
                return Err(Error::image_processing(
                    "Failed to initialise OCR engine",
                    OcrError::BackendNotAvailable(
                        "built without the `ocr-ocrs` feature".to_string(),
                    ),
                ))
            }
        };
        log::info!("Using {} OCR engine", extractor.engine.name());
        Ok(extractor)
    }

    /// Downloads the image at `url` and returns its text, one recognised line
    /// per line.
    pub async fn extract(&self, client: &Client, url: &Url) -> crate::Result<String> {
        let bytes = fetch::image_bytes(client, url).await?;
        self.extract_from_bytes(&bytes)
    }

    pub fn extract_from_bytes(&self, bytes: &[u8]) -> crate::Result<String> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| Error::image_processing("Failed to decode menu image", e))?;
        let image = DynamicImage::ImageLuma8(image.to_luma8());
        let lines = self
            .engine
            .recognize(&image)
            .map_err(|e| Error::image_processing("Failed to process menu image", e))?;
        Ok(lines.join("\n"))
    }
}
