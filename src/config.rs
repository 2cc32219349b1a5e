use std::{env, path::PathBuf, str::FromStr, time::Duration};

use url::Url;

use crate::{menu::report::OutputFormat, ocr::Backend, parse::PriceLabels};

pub const HOMEPAGE: &str = "https://vanderveg.si";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub homepage: Url,
    pub timeout: Duration,
    pub ocr_backend: Backend,
    pub ocr_language: String,
    #[cfg_attr(not(feature = "ocr-ocrs"), allow(dead_code))]
    pub ocrs_models: Option<PathBuf>,
    pub output: OutputFormat,
    pub price_labels: PriceLabels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: Url::parse(HOMEPAGE).expect("homepage url should be valid"),
            timeout: DEFAULT_TIMEOUT,
            ocr_backend: Backend::default(),
            ocr_language: crate::ocr::DEFAULT_LANGUAGE.to_string(),
            ocrs_models: None,
            output: OutputFormat::default(),
            price_labels: PriceLabels::default(),
        }
    }
}

/// Parses `value`, keeping `default` (with a warning) when it does not parse.
fn parse_or<T, E: std::fmt::Display>(
    key: &str,
    value: Option<String>,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> T {
    match value.as_deref().map(str::trim) {
        None => default,
        Some(raw) => parse(raw).unwrap_or_else(|e| {
            log::warn!("env var {key}={raw:?} is invalid ({e}), using the default.");
            default
        }),
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let homepage = parse_or(
            "MENU_HOMEPAGE",
            var("MENU_HOMEPAGE"),
            defaults.homepage,
            Url::parse,
        );
        let timeout = parse_or(
            "MENU_TIMEOUT_SECS",
            var("MENU_TIMEOUT_SECS"),
            defaults.timeout,
            |s| u64::from_str(s).map(Duration::from_secs),
        );
        let ocr_backend = parse_or(
            "MENU_OCR_BACKEND",
            var("MENU_OCR_BACKEND"),
            defaults.ocr_backend,
            Backend::from_str,
        );
        let output = parse_or(
            "MENU_OUTPUT",
            var("MENU_OUTPUT"),
            defaults.output,
            OutputFormat::from_str,
        );

        let ocr_language = var("MENU_OCR_LANG").unwrap_or(defaults.ocr_language);
        let ocrs_models = var("MENU_OCRS_MODELS").map(PathBuf::from);
        let price_labels = PriceLabels {
            soup: var("MENU_SOUP_PRICE_LABEL").unwrap_or(defaults.price_labels.soup),
            main_dish: var("MENU_MAIN_PRICE_LABEL").unwrap_or(defaults.price_labels.main_dish),
        };

        Self {
            homepage,
            timeout,
            ocr_backend,
            ocr_language,
            ocrs_models,
            output,
            price_labels,
        }
    }
}
