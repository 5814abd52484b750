//! End-point /export : le dataset complet en CSV, en pièce jointe.

use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse,
};
use log::warn;

use crate::{error::ApiError, services::export::to_csv, state::AppState};

const EXPORT_FILENAME: &str = "individuals.csv";

#[get("/export")]
async fn export(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let body = to_csv(state.dataset.records()).map_err(|e| {
        warn!("CSV export failed: {e}");
        e
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(EXPORT_FILENAME.into())],
        })
        .body(body))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(export);
}
