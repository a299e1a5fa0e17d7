//! Storefront web client: catalog, product detail, sign-in and the admin area.

mod api;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod language;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod routes_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: FrontendConfig::new().default_language,
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::log_1(&format!("logger already initialised: {err}").into());
    }

    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));
}

fn main() {
    init_logging();
    let config = FrontendConfig::new();
    log::info!(
        "starting {} against {}",
        config.store_name(),
        config.api_base_url()
    );

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    match root {
        Some(body) => {
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => log::error!("no document body to mount the storefront on"),
    }
}
