use actix_web::middleware::Next;
use actix_web::{
    Error, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web,
};
use tracing::{debug, info};

/// Shared secret guarding the mint endpoint, injected as app data.
#[derive(Clone)]
pub struct MintSecret(pub String);

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// Mint API 身份验证中间件
    pub async fn bearer_auth(
        req: ServiceRequest,
        next: Next<BoxBody>,
    ) -> Result<ServiceResponse<BoxBody>, Error> {
        let secret = req
            .app_data::<web::Data<MintSecret>>()
            .map(|data| data.0.clone())
            .unwrap_or_default();

        // 检查 Authorization header
        if !secret.is_empty() {
            if let Some(header) = req.headers().get("Authorization") {
                if let Ok(value) = header.to_str() {
                    if let Some((scheme, token)) = value.split_once(' ') {
                        if scheme.eq_ignore_ascii_case("bearer") && token == secret {
                            debug!("mint authentication succeeded");
                            return next.call(req).await;
                        }
                    }
                }
            }
        }

        info!("mint authentication failed: token mismatch or missing Authorization header");
        Ok(req.into_response(
            HttpResponse::Unauthorized()
                .append_header(("Content-Type", "application/json; charset=utf-8"))
                .json(serde_json::json!({
                    "code": 401,
                    "data": { "error": "Unauthorized: Invalid or missing token" }
                })),
        ))
    }
}
