use actix_web::web;

use crate::error::Error;
use crate::store::MessageStore;
use crate::validate::ValidationError;

pub mod messages;

/// Registers the `/api` routes for a store of type `S`. The store itself is
/// expected as `web::Data<S>` app data.
pub fn configure<S: MessageStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                .route("/messages", web::get().to(messages::get_messages::<S>))
                .route("/messages", web::post().to(messages::create_message::<S>))
                .route("/messages/{id}", web::delete().to(messages::delete_message::<S>)),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::from(ValidationError::MalformedBody(err.to_string())).into())
}

// An id that is not an integer can never name a stored message.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| Error::NotFound.into())
}
