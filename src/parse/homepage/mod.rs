//! Scanning of the restaurant homepage: where the weekly menu image lives and
//! what the daily dishes cost.
mod menu_image;
mod prices;

pub use menu_image::find_menu_image_url;
pub use prices::PriceLabels;
