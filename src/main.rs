#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// hide the cmd when opening the exe on windows, see: https://github.com/emilk/egui/issues/116
#![windows_subsystem = "windows"]

#[macro_use]
extern crate rust_i18n;
i18n!("locales");

mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(not(target_arch = "wasm32"))]
mod document;
mod error;
mod mode;
mod toggle;
#[cfg(not(target_arch = "wasm32"))]
mod view;

use config::Config;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load();
    apply_language(&config.language);

    let view = view::View::new(config).map_err(|err| {
        log::error!("{err:#}");
        err
    })?;
    view.start()
}

#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_LANGUAGE: &str = "en";

/// Switch the captions to the given language. Without a locale file for it
/// every caption would show its raw key, so English is used instead.
#[cfg(not(target_arch = "wasm32"))]
fn apply_language(language: &str) -> &str {
    let locale = if available_locales!().iter().any(|locale| *locale == language) {
        language
    } else {
        log::warn!("no translations for language `{language}`, using `{FALLBACK_LANGUAGE}`");
        FALLBACK_LANGUAGE
    };
    rust_i18n::set_locale(locale);
    locale
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Redirect `log` messages to `console.log` and friends:
    let _result = eframe::WebLogger::init(log::LevelFilter::Debug);

    // the page has no config file, the markup is built against the defaults
    let config = Config::default();
    if let Err(err) = dom::bind_document(&config) {
        log::error!("{err:#}");
    }
}
