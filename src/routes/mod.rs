// Route exports
pub mod error;
pub mod matches;

use actix_web::web;

pub use error::{ApiError, handle_json_payload_error};
pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}
