use scraper::Html;
use url::Url;

use crate::parse::error::{Error, Result};
use crate::static_selector;

/// Fragment every weekly menu upload carries in its file name.
const MENU_FRAGMENT: &str = "meni";
const JPEG_SUFFIXES: [&str; 2] = [".jpg", ".jpeg"];

/// Finds the first `<img>` on the homepage that looks like the menu upload and
/// returns its absolute url.
pub fn find_menu_image_url(document: &Html, homepage: &Url) -> Result<Url> {
    static_selector!(IMG_SELECTOR <- "img");
    let src = document
        .select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .find(|src| is_menu_image(src))
        .ok_or(Error::MenuImageNotFound)?;
    resolve(src, homepage)
}

fn is_menu_image(src: &str) -> bool {
    let src = src.to_lowercase();
    src.contains(MENU_FRAGMENT) && JPEG_SUFFIXES.iter().any(|suffix| src.ends_with(suffix))
}

// relative sources hang off the site root, not off the page that embeds them
fn resolve(src: &str, homepage: &Url) -> Result<Url> {
    if src.starts_with("http") {
        return Url::parse(src).map_err(|e| Error::invalid_url(src, &e));
    }
    let root = homepage.join("/")?;
    root.join(src).map_err(|e| Error::invalid_url(src, &e))
}
