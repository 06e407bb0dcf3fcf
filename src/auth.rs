//! Bearer-token authentication. A request is accepted only if it carries a
//! token signed with the configured secret AND a matching session row exists;
//! everything else is a 401 before the handler runs.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::errors::ApiError;
use crate::repositories::sessions;

/// Token payload. Tokens are minted by the upstream sign-in service and carry
/// no expiry claim; session rows are the revocation mechanism.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i64,
}

/// The verified caller identity, extracted per request.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(|t| t.trim().to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req).ok_or(ApiError::Unauthorized)?;

            let config = req
                .app_data::<web::Data<Config>>()
                .ok_or(ApiError::Unauthorized)?;
            let claims =
                decode_token(&token, &config.jwt_secret).map_err(|_| ApiError::Unauthorized)?;

            let pool = req
                .app_data::<web::Data<SqlitePool>>()
                .ok_or(ApiError::Unauthorized)?;
            sessions::find_by_token(pool, &token)
                .await
                .map_err(|_| ApiError::Unauthorized)?
                .ok_or(ApiError::Unauthorized)?;

            Ok(AuthenticatedUser {
                user_id: claims.user_id,
            })
        })
    }
}
