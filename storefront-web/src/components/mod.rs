pub(crate) mod category_filter;
pub(crate) mod credentials_form;
pub(crate) mod demo_credentials;
pub(crate) mod error_alert;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod nav_link;
pub(crate) mod product_card;

// Re-export components for convenience
pub use category_filter::CategoryFilterBar;
pub use credentials_form::CredentialsForm;
pub use demo_credentials::DemoCredentials;
pub use error_alert::ErrorAlert;
pub use loading::Loading;
pub use product_card::ProductCard;
