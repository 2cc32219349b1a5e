use regex::Regex;
use scraper::Html;

use crate::menu::{Price, PricePair};

/// Phrases that introduce the daily prices in the homepage text. Kept as data
/// so another locale only needs different labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLabels {
    pub soup: String,
    pub main_dish: String,
}

impl Default for PriceLabels {
    fn default() -> Self {
        Self {
            soup: "Dnevna juha:".to_string(),
            main_dish: "Dnevna glavna jed:".to_string(),
        }
    }
}

impl PriceLabels {
    fn find(label: &str, text: &str) -> Option<Price> {
        let pattern = format!(r"{}\s*(\d+[,.]\d+€)", regex::escape(label));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                log::warn!("Price label {label:?} does not form a valid pattern: {e}");
                return None;
            }
        };
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|amount| Price::new(amount.as_str()))
    }
}

impl PricePair {
    pub fn from_text(text: &str, labels: &PriceLabels) -> Self {
        let pair = Self {
            soup: PriceLabels::find(&labels.soup, text),
            main_dish: PriceLabels::find(&labels.main_dish, text),
        };
        if pair.soup.is_none() && pair.main_dish.is_none() {
            log::info!("No daily prices found on homepage");
        }
        pair
    }

    /// Prices from the homepage html. Anything unexpected in the markup just
    /// means the prices are absent.
    pub fn from_html(html: &str, labels: &PriceLabels) -> Self {
        let document = Html::parse_document(html);
        let text: String = document.root_element().text().collect();
        Self::from_text(&text, labels)
    }
}
