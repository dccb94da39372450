include!("../../lib.rs");
use lambda_http::{run, Error};
use tracing::info;
use crate::catalog::controller::build_router;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, ServerRuntime};
use crate::utils::logs::setup_tracing;
use crate::utils::shutdown::shutdown_signal;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    info!("starting books service with {} store on {} runtime", config.store, config.runtime);
    let state = AppState::new(create_catalog_service(&config).await);

    match config.runtime {
        ServerRuntime::Lambda => {
            run(build_router::<lambda_http::Body>(state)).await
        }
        ServerRuntime::Http => {
            info!("listening on {}", config.bind_addr);
            axum::Server::bind(&config.bind_addr)
                .serve(build_router::<axum::body::Body>(state).into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            // the store is released with the router
            info!("books service stopped");
            Ok(())
        }
    }
}
