mod app;
mod config;
mod error;
mod services;
mod state;
mod utils;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use crate::{
    config::Config,
    error::error_stage,
    services::individuals::Dataset,
    state::AppState,
    utils::logger,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::init();

    // -------- config + dataset (fatal si absent / invalide) ----------------------
    let config = Config::from_env()?;
    let dataset = Dataset::load(&config.dataset_path)?;
    info!(
        "Loaded {} individual(s) from {}",
        dataset.len(),
        config.dataset_path.display()
    );

    if dataset.is_empty() {
        warn!("Dataset is empty, /api/export will answer 500");
    }

    let state = AppState::new(dataset);

    let bundle = config.bundle_dir();
    match &bundle {
        Some(dir) => info!("Serving static bundle from {}", dir.display()),
        None => info!(
            "No static bundle at {}, catch-all disabled",
            config.static_dir.display()
        ),
    }

    // -------- app factory -------------------------------------------------------
    let make_app = move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(error_stage())
            .wrap(app::cors())
            .wrap(logger::access_log())
            .configure(app::routes(bundle.clone()))
    };

    let server = HttpServer::new(make_app)
        .bind((config.bind_addr.as_str(), config.port))
        .with_context(|| format!("binding {}:{}", config.bind_addr, config.port))?;

    info!("Backend server running on port {}", config.port);
    server.run().await?;
    Ok(())
}
