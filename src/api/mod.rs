#[macro_use]
mod macros;

mod error;
mod health;
mod rewrite;

#[cfg(test)]
pub mod test;

use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed event payloads should come back in our JSON error shape
    // rather than actix's plain-text default.
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| APIError::from(err).into()),
    );

    health::configure(cfg);
    rewrite::configure(cfg);
}
