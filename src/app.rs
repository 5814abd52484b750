use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::web;

use crate::services::{bundle, export, individuals, login, logs};

/// Aucune restriction d'origine.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn routes(bundle_dir: Option<PathBuf>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let mut api = web::scope("/api")
            .configure(individuals::init)
            .configure(login::init)
            .configure(logs::init)
            .configure(export::init);

        // le scope /api capte tout le préfixe : sans ça, /api/xyz finit en 404
        if let Some(dir) = &bundle_dir {
            api = api.default_service(bundle::entry_service(dir));
        }
        cfg.service(api);

        if let Some(dir) = bundle_dir {
            bundle::init(cfg, dir);
        }
    }
}
