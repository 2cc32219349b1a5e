use std::str::FromStr;

use super::{Menu, Price, PricePair};

const TITLE: &str = "--- VanderVeg Menu ---";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

pub fn render(
    menu: &Menu,
    prices: &PricePair,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text(menu, prices)),
        OutputFormat::Json => json(menu, prices),
    }
}

fn with_price(dish: &str, price: Option<&Price>) -> String {
    price.map_or_else(|| dish.to_string(), |price| format!("{dish} ({price})"))
}

pub fn text(menu: &Menu, prices: &PricePair) -> String {
    let mut lines = vec![format!("{TITLE}\n")];
    for (day, entry) in menu {
        lines.push(day.to_string());
        lines.push(format!("Juha: {}", with_price(entry.soup(), prices.soup.as_ref())));
        lines.push(format!(
            "Glavna jed: {}",
            with_price(entry.main_dish(), prices.main_dish.as_ref())
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}

#[derive(serde::Serialize)]
struct Report<'a> {
    prices: &'a PricePair,
    days: &'a Menu,
}

pub fn json(menu: &Menu, prices: &PricePair) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report { prices, days: menu })
}
