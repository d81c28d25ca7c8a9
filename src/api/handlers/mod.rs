//! Endpoint handlers, one module per route.

pub mod health;
pub mod redirect;
pub mod short;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use short::create_short_url_handler;
