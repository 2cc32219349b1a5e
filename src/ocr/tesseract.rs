use std::{
    io::{Cursor, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use image::{DynamicImage, ImageFormat};

use super::{OcrEngine, OcrError};

/// Slovenian traineddata, the language the menu is written in.
pub const DEFAULT_LANGUAGE: &str = "slv";

/// Runs the `tesseract` binary, feeding the image through stdin and reading
/// plain text back from stdout.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    program: PathBuf,
    language: String,
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl TesseractEngine {
    pub fn new(language: &str) -> Self {
        Self {
            program: PathBuf::from("tesseract"),
            language: language.to_string(),
        }
    }

    #[cfg(test)]
    fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn encode(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| OcrError::Failed(format!("Failed to encode image for tesseract: {e}")))?;
        Ok(png)
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<Vec<String>, OcrError> {
        let png = Self::encode(image)?;
        let spawned = Command::new(&self.program)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OcrError::BackendNotAvailable(format!(
                    "{} not found (install tesseract-ocr and tesseract-ocr-{})",
                    self.program.display(),
                    self.language
                )));
            }
            Err(e) => return Err(OcrError::Io(e)),
        };
        // tesseract reads the whole image before it writes anything. stdin is
        // closed at the end of the closure; the child is reaped either way.
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(&png));
        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if let Err(e) = written {
            return Err(OcrError::Failed(format!(
                "Failed to send image to tesseract ({e}): {}",
                stderr.trim()
            )));
        }
        if !output.status.success() {
            return Err(OcrError::Failed(format!("tesseract failed: {}", stderr.trim())));
        }
        log::trace!("tesseract: {}", stderr.trim());

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
