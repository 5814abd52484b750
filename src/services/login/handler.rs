//! End-point /login : login factice, aucune vérification, juste une trace.

use actix_web::{post, web, HttpRequest, HttpResponse};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, services::logs::LoginLogEntry, state::AppState};

#[derive(Default, Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: Option<String>,
}

impl LoginForm {
    /// JSON quel que soit le Content-Type ; un body vide vaut `{}`.
    fn parse(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| ApiError::Unhandled(format!("POST /api/login body: {e}")))
    }
}

#[derive(Serialize)]
struct LoginResponse {
    status: &'static str,
    user: String,
}

#[post("/login")]
async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let username = match LoginForm::parse(&body)?.username {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::MissingUsername),
    };

    let ip = req
        .connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string();

    let entry = LoginLogEntry::now(username.clone(), ip);
    info!("{entry}");
    state.logins.append(entry);
    debug!("{} login(s) recorded", state.logins.len());

    Ok(HttpResponse::Ok().json(LoginResponse {
        status: "success",
        user: username,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
