//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::Router;
use saema_web::config::{Config, EmailConfig, LoggingConfig, ServerConfig};
use saema_web::email::EmailService;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        email: EmailConfig::default(),
        logging: LoggingConfig::default(),
    }
}

/// App wired to a mock email service; sends always succeed without SMTP.
pub fn create_test_app() -> Router {
    let config = test_config();
    let email = EmailService::new_mock(&config.email);
    saema_web::create_app(config, email)
}

/// App wired to a real SMTP transport pointing at a port nothing listens on,
/// so every send fails at the transport layer.
pub fn create_unreachable_smtp_app() -> Router {
    let mut config = test_config();
    config.email.smtp_host = "127.0.0.1".to_string();
    config.email.smtp_port = 9;
    let email = EmailService::new(&config.email).expect("email service");
    saema_web::create_app(config, email)
}
