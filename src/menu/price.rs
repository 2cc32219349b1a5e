use std::fmt::Display;

/// An amount as printed on the homepage, e.g. `12,50€`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(amount: &str) -> Self {
        Self(amount.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PricePair {
    pub soup: Option<Price>,
    pub main_dish: Option<Price>,
}
