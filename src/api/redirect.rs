use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::error;

use crate::services::Resolver;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{token}` — 307 to the target for a live binding, 404 for a
    /// missing or expired one. Store lookups are blocking, so they run off
    /// the actix worker via `web::block`.
    pub async fn handle_redirect(
        path: web::Path<String>,
        resolver: web::Data<Resolver>,
    ) -> impl Responder {
        let token = path.into_inner();
        if token.is_empty() {
            return Self::not_found();
        }

        match web::block(move || resolver.resolve(&token)).await {
            Ok(Ok(Some(target))) => HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                .insert_header(("Location", target))
                .finish(),
            Ok(Ok(None)) => Self::not_found(),
            Ok(Err(err)) => {
                error!(error = %err, "resolve failed");
                Self::internal_error()
            }
            Err(err) => {
                error!(error = %err, "resolver task failed");
                Self::internal_error()
            }
        }
    }

    fn not_found() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60")) // 缓存404
            .body("Not Found")
    }

    fn internal_error() -> HttpResponse {
        HttpResponse::InternalServerError().body("internal server error")
    }
}
