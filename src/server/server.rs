//! HTTP server core implementation

use actix_cors::Cors;
use actix_web::{middleware::DefaultHeaders, web, App, HttpServer as ActixHttpServer};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use crate::config::models::ServerConfig;
use crate::config::Config;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        let state = AppState::new(config.clone())?;
        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create the Actix-web application
    fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = Self::build_cors(&state.config.server().cors);

        App::new()
            .app_data(state)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "EchoCode-Gateway")))
            .configure(routes::configure)
    }

    /// Build the CORS middleware from configuration
    fn build_cors(config: &crate::config::models::CorsConfig) -> Cors {
        let mut cors = Cors::default();

        if !config.enabled {
            return cors;
        }

        if config.allows_all_origins() {
            cors = cors.allow_any_origin();
            if let Err(e) = config.validate() {
                warn!(error = %e, "CORS configuration warning");
            }
        } else {
            for origin in &config.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        let methods: Vec<actix_web::http::Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        if !methods.is_empty() {
            cors = cors.allowed_methods(methods);
        }

        let headers: Vec<actix_web::http::header::HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if !headers.is_empty() {
            cors = cors.allowed_headers(headers);
        }

        cors = cors.max_age(config.max_age as usize);

        if config.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Format a user-friendly error message for port binding failures
fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
    let error_str = error.to_string();

    if error_str.contains("Address already in use")
        || error_str.contains("os error 48")
        || error_str.contains("os error 98")
    {
        GatewayError::internal(format!(
            "Port {} is already in use. Kill the existing process (lsof -ti:{} | xargs kill) \
             or pick another port via GATEWAY_PORT.",
            port, port
        ))
    } else if error_str.contains("Permission denied") || error_str.contains("os error 13") {
        GatewayError::internal(format!(
            "Permission denied for port {}. Ports below 1024 need elevated privileges; \
             use a port >= 1024 via GATEWAY_PORT.",
            port
        ))
    } else {
        GatewayError::internal(format!("Failed to bind to {}: {}", bind_addr, error))
    }
}
