//! Front-end build servi tel quel, avec fallback SPA sur `index.html`.

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::Method,
    web, Error, HttpResponse,
};

use crate::error::ApiError;

pub const ENTRY_FILE: &str = "index.html";

/// Mount last: it answers every path the API did not claim.
pub fn init(cfg: &mut web::ServiceConfig, dir: PathBuf) {
    cfg.service(
        Files::new("/", &dir)
            .index_file(ENTRY_FILE)
            .default_handler(entry_service(&dir)),
    );
}

/// GET/HEAD -> `index.html`; any other method is a plain 404.
pub fn entry_service(
    dir: &std::path::Path,
) -> impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse,
    Error = Error,
    InitError = (),
> + 'static {
    let entry = dir.join(ENTRY_FILE);

    fn_service(move |req: ServiceRequest| {
        let entry = entry.clone();
        async move {
            let (req, _) = req.into_parts();
            if !matches!(*req.method(), Method::GET | Method::HEAD) {
                return Ok(ServiceResponse::new(req, HttpResponse::NotFound().finish()));
            }

            let res = match NamedFile::open_async(&entry).await {
                Ok(file) => file.into_response(&req),
                Err(e) => HttpResponse::from_error(ApiError::Unhandled(format!(
                    "{}: {e}",
                    entry.display()
                ))),
            };
            Ok::<_, Error>(ServiceResponse::new(req, res))
        }
    })
}
