//! Pure-Rust OCR through `ocrs`. Its models only cover latin script, so there
//! is no language to choose; the diacritics on the menu come out best effort.

use std::path::Path;

use image::DynamicImage;

use super::{OcrEngine, OcrError};

const DETECTION_MODEL: &str = "text-detection.rten";
const RECOGNITION_MODEL: &str = "text-recognition.rten";

pub struct OcrsEngine {
    engine: ocrs::OcrEngine,
}

impl OcrsEngine {
    /// Loads both models from `dir`. This is the expensive part, do it once.
    pub fn from_model_dir(dir: &Path) -> Result<Self, OcrError> {
        let load = |file: &str| {
            let path = dir.join(file);
            if !path.is_file() {
                return Err(OcrError::BackendNotAvailable(format!(
                    "{} is missing (download it from https://ocrs-models.s3-accelerate.amazonaws.com/{file})",
                    path.display()
                )));
            }
            rten::Model::load_file(&path)
                .map_err(|e| OcrError::Failed(format!("Failed to load {file}: {e}")))
        };
        let engine = ocrs::OcrEngine::new(ocrs::OcrEngineParams {
            detection_model: Some(load(DETECTION_MODEL)?),
            recognition_model: Some(load(RECOGNITION_MODEL)?),
            ..Default::default()
        })
        .map_err(|e| OcrError::Failed(format!("Failed to create OCR engine: {e}")))?;
        Ok(Self { engine })
    }
}

impl OcrEngine for OcrsEngine {
    fn name(&self) -> &'static str {
        "ocrs"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<Vec<String>, OcrError> {
        let rgb = image.to_rgb8();
        let source = ocrs::ImageSource::from_bytes(rgb.as_raw(), rgb.dimensions())
            .map_err(|e| OcrError::Failed(format!("Failed to convert image: {e}")))?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|e| OcrError::Failed(format!("Failed to prepare input: {e}")))?;
        let text = self
            .engine
            .get_text(&input)
            .map_err(|e| OcrError::Failed(format!("Failed to extract text: {e}")))?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
