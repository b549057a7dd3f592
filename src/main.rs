use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use chrono::Duration;
use clap::Parser;
use tracing::info;

use linkmint::api::{MintService, RedirectService};
use linkmint::config::Config;
use linkmint::middleware::{AuthMiddleware, MintSecret};
use linkmint::services::{Minter, Resolver, Sweeper};
use linkmint::storage::Store;
use linkmint::system::init_logging;
use linkmint::utils::generate_session_secret;
use linkmint::utils::token::RandomTokens;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    let _log_guard = init_logging();

    let secret = config.secret.clone().unwrap_or_else(|| {
        let generated = generate_session_secret();
        info!(secret = %generated, "no secret configured, random key for this session");
        generated
    });

    // Store-open failure is the one fatal error; everything after startup
    // degrades instead of exiting.
    let store = Store::open(&config.db).map_err(|err| std::io::Error::other(err.to_string()))?;

    let minter = Minter::new(
        store.clone(),
        Arc::new(RandomTokens::new(config.token_length)),
        Duration::days(config.ttl_days),
    );
    let resolver = Resolver::new(store.clone());
    let sweeper = Sweeper::new(
        store.clone(),
        std::time::Duration::from_secs(config.sweep_interval),
    );

    std::thread::spawn(move || sweeper.run());

    let minter = web::Data::new(minter);
    let resolver = web::Data::new(resolver);
    let mint_secret = web::Data::new(MintSecret(secret));

    let bind_address = format!("{}:{}", config.host, config.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(minter.clone())
            .app_data(resolver.clone())
            .app_data(mint_secret.clone())
            .service(
                web::scope("/mint")
                    .wrap(from_fn(AuthMiddleware::bearer_auth))
                    .route("", web::get().to(MintService::mint_query))
                    .route("", web::post().to(MintService::mint_form)),
            )
            .route("/{token}", web::get().to(RedirectService::handle_redirect))
            .route("/{token}", web::head().to(RedirectService::handle_redirect))
    })
    .bind(bind_address)?
    .run()
    .await
}
