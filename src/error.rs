use actix_web::{
    dev::ServiceResponse,
    http::{header::ContentType, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpResponse, ResponseError,
};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::services::export::ExportError;

const GENERIC_FAILURE: &str = "Something broke!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username is required")]
    MissingUsername,

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Detail stays in the server log; the client only gets the generic text.
    #[error("Something broke!")]
    Unhandled(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUsername => StatusCode::BAD_REQUEST,
            ApiError::Export(_) | ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Unhandled(detail) => {
                error!("unhandled error: {detail}");
                HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(GENERIC_FAILURE)
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorBody {
                error: self.to_string(),
            }),
        }
    }
}

/// Dernier filet : toute 500 qui ne vient pas d'un `ApiError` devient `Unhandled`.
pub fn error_stage<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, unclassified)
}

fn unclassified<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let detail = res
        .response()
        .error()
        .filter(|err| err.as_error::<ApiError>().is_none())
        .map(|err| err.to_string());
    let Some(detail) = detail else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let (req, _) = res.into_parts();
    let res = HttpResponse::from_error(ApiError::Unhandled(format!(
        "{} {}: {detail}",
        req.method(),
        req.path()
    )));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
