mod allergens;
mod normalize;
mod price;
pub mod report;

use std::{borrow::Borrow, fmt::Display};

use indexmap::IndexMap;

pub use allergens::AllergenFlags;
pub use normalize::normalize;
pub use price::{Price, PricePair};

/// `"<weekday>, <day>. <month>."` as printed above each day on the menu image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct DayLabel(String);

impl DayLabel {
    pub fn new(weekday: &str, day: &str, month: &str) -> Self {
        Self(format!("{weekday}, {day}. {month}."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DayLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DayEntry {
    soup: String,
    main_dish: String,
    soup_allergens: AllergenFlags,
    main_dish_allergens: AllergenFlags,
}

impl DayEntry {
    pub fn new(soup: impl Into<String>, main_dish: impl Into<String>) -> Self {
        Self {
            soup: soup.into(),
            main_dish: main_dish.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_allergens(mut self, soup: AllergenFlags, main_dish: AllergenFlags) -> Self {
        self.soup_allergens = soup;
        self.main_dish_allergens = main_dish;
        self
    }

    pub fn soup(&self) -> &str {
        &self.soup
    }

    pub fn main_dish(&self) -> &str {
        &self.main_dish
    }

    #[cfg(test)]
    pub const fn soup_allergens(&self) -> AllergenFlags {
        self.soup_allergens
    }

    #[cfg(test)]
    pub const fn main_dish_allergens(&self) -> AllergenFlags {
        self.main_dish_allergens
    }

    /// `[soup, main dish]`
    #[cfg(test)]
    pub fn as_pair(&self) -> [&str; 2] {
        [&self.soup, &self.main_dish]
    }
}

/// Days in the order they appear on the menu image.
pub type Menu = IndexMap<DayLabel, DayEntry>;
