//! HTTP route modules

pub mod generate;
pub mod health;
pub mod transcribe;
pub mod translate;

use actix_web::web;

/// Mount every route the gateway serves
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/version", web::get().to(health::version_info))
        .service(
            web::scope("/api")
                .route("/generate", web::post().to(generate::generate))
                .route("/stt", web::post().to(transcribe::transcribe))
                .route("/translate", web::post().to(translate::translate)),
        );
}
