//! Init d'`env_logger` avec une valeur par défaut, plus le format d'access-log.

use actix_web::middleware::Logger;
use env_logger::Env;

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// method, path, status, elapsed, size : `GET /api/logs 200 0.412 ms - 57`
pub const ACCESS_LOG_FORMAT: &str = "%{method}xi %U %s %D ms - %b";

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).init();
}

pub fn access_log() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT)
        .custom_request_replace("method", |req| req.method().to_string())
}
