#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod menu;
mod ocr;
mod parse;
mod scrape_menu;
mod statics;

use config::Config;

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();
    let config = Config::from_env();
    log::debug!("{config:?}");
    match scrape_menu::run(&config).await {
        Ok(report) => println!("{report}"),
        Err(e) => {
            log::error!("Error: {e}");
            std::process::exit(1);
        }
    }
}
