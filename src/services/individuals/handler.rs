//! End-point /individuals.

use actix_web::{get, web, HttpResponse};

use crate::state::AppState;

#[get("/individuals")]
async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.dataset.records())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list);
}
