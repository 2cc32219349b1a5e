mod error;
mod homepage;
pub use error::Error;

pub use homepage::find_menu_image_url;
pub use homepage::PriceLabels;
