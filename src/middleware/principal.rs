use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::domain::Principal;
use crate::error::AppError;

/// The admin principal verified by the upstream auth gateway. The gateway
/// terminates authentication and forwards the identity as trusted headers;
/// this service never sees or verifies credentials itself. Requests that
/// reach a protected handler without the full header set are rejected.
#[derive(Debug, Clone)]
pub struct AdminPrincipal(pub Principal);

const HEADER_ADMIN_ID: &str = "x-admin-id";
const HEADER_ADMIN_NAME: &str = "x-admin-name";
const HEADER_ADMIN_EMAIL: &str = "x-admin-email";

impl FromRequest for AdminPrincipal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_principal(req))
    }
}

fn extract_principal(req: &HttpRequest) -> Result<AdminPrincipal, AppError> {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    };

    let id = header(HEADER_ADMIN_ID)
        .and_then(|value| Uuid::parse_str(&value).ok())
        .ok_or(AppError::Unauthorized)?;
    let name = header(HEADER_ADMIN_NAME).ok_or(AppError::Unauthorized)?;
    let email = header(HEADER_ADMIN_EMAIL).ok_or(AppError::Unauthorized)?;

    Ok(AdminPrincipal(Principal { id, name, email }))
}
