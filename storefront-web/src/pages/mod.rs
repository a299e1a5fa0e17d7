mod admin;
mod error;
mod home;
pub mod login;
mod product;
mod register;

pub use admin::AdminPage;
pub use error::NotFoundPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use product::ProductPage;
pub use register::RegisterPage;
