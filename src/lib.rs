pub mod assets;
pub mod config;
pub mod email;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured, useful for integration
/// testing without starting the full server.
pub fn create_app(config: Config, email: email::EmailService) -> axum::Router {
    routes::router(AppState { config, email })
}
