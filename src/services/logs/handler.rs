use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::state::AppState;

#[get("/logs")]
async fn login_logs(state: web::Data<AppState>) -> HttpResponse {
    if state.logins.is_empty() {
        debug!("no login recorded yet");
    }
    HttpResponse::Ok().json(state.logins.list_all())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login_logs);
}
