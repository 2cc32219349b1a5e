//! Scrapes https://vanderveg.si for this week's menu: find the menu image on
//! the homepage, read it with OCR, and parse the text into days.
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::{
    config::Config,
    fetch,
    menu::{normalize, report, PricePair},
    ocr::Extractor,
    parse::find_menu_image_url,
};

/// The url of the current menu image, along with the homepage html it was
/// found in.
pub async fn locate_menu_image(client: &Client, homepage: &Url) -> crate::Result<(Url, String)> {
    let html = fetch::homepage(client, homepage).await?;
    let image_url = find_menu_image_url(&Html::parse_document(&html), homepage)?;
    Ok((image_url, html))
}

pub async fn run(config: &Config) -> crate::Result<String> {
    let extractor = Extractor::from_config(config)?;
    run_with(config, &extractor).await
}

/// Runs the whole pipeline with an already built OCR engine and returns the
/// rendered report.
pub async fn run_with(config: &Config, extractor: &Extractor) -> crate::Result<String> {
    let client = fetch::make_client(config.timeout)?;
    let (image_url, html) = locate_menu_image(&client, &config.homepage).await?;
    log::info!("Menu image URL: {image_url}");

    let raw = extractor.extract(&client, &image_url).await?;
    log::debug!("Extracted menu text:\n{raw}");

    let menu = normalize(&raw);
    if menu.is_empty() {
        log::warn!("No days recognised in the menu image");
    }
    let prices = PricePair::from_html(&html, &config.price_labels);
    Ok(report::render(&menu, &prices, config.output)?)
}
