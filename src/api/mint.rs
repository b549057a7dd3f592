use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::error;

use crate::errors::LinkmintError;
use crate::services::Minter;

#[derive(Deserialize, Clone, Debug)]
pub struct MintRequest {
    #[serde(default)]
    pub url: String,
}

pub struct MintService;

impl MintService {
    /// `GET /mint?url=...` — the form the batch rewriter uses.
    pub async fn mint_query(
        query: web::Query<MintRequest>,
        minter: web::Data<Minter>,
    ) -> impl Responder {
        Self::mint(query.into_inner(), minter).await
    }

    /// `POST /mint` with a form body.
    pub async fn mint_form(
        form: web::Form<MintRequest>,
        minter: web::Data<Minter>,
    ) -> impl Responder {
        Self::mint(form.into_inner(), minter).await
    }

    async fn mint(request: MintRequest, minter: web::Data<Minter>) -> HttpResponse {
        // Empty input never reaches the store transaction.
        if request.url.is_empty() {
            return HttpResponse::BadRequest().body("missing `url`");
        }

        let url = request.url;
        match web::block(move || minter.mint(&url)).await {
            Ok(Ok(token)) => HttpResponse::Ok().body(token),
            Ok(Err(LinkmintError::Validation(msg))) => HttpResponse::BadRequest().body(msg),
            Ok(Err(err)) => {
                error!(error = %err, "mint failed");
                HttpResponse::InternalServerError().body("internal server error")
            }
            Err(err) => {
                error!(error = %err, "mint task failed");
                HttpResponse::InternalServerError().body("internal server error")
            }
        }
    }
}
