#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the flood map dashboard.
//!
//! Serves the JSON API the dashboard charts are drawn from, plus the static
//! front end files. The survey CSV is loaded once at startup into an
//! immutable in-memory dataset shared across workers; every request answers
//! from those rows.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use flood_map_dataset::SurveyDataset;

/// Survey CSV path used when `FLOOD_DATA_PATH` is unset.
pub const DEFAULT_DATA_PATH: &str = "data/flood_data_with_coordinates.csv";
/// Front end directory used when `FLOOD_ASSETS_DIR` is unset.
pub const DEFAULT_ASSETS_DIR: &str = "app";

/// Shared application state.
pub struct AppState {
    /// Survey dataset loaded at startup. Never mutated afterwards.
    pub dataset: Arc<SurveyDataset>,
}

fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health))
        .route("/filters", web::get().to(handlers::filters))
        .route("/charts/bar", web::get().to(handlers::bar_chart))
        .route("/charts/pie", web::get().to(handlers::pie_chart))
        .route("/charts/map", web::get().to(handlers::map_chart))
        .route("/summary", web::get().to(handlers::summary))
}

/// Starts the flood map API server.
///
/// Loads the survey CSV, then starts the Actix-Web HTTP server with the
/// dataset shared across workers. This is a regular async function; the
/// caller provides the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the survey CSV cannot be read or contains no rows.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_path =
        std::env::var("FLOOD_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    log::info!("Loading survey dataset from {data_path}...");
    let dataset =
        SurveyDataset::load(Path::new(&data_path)).expect("Failed to load survey dataset");

    let state = web::Data::new(AppState {
        dataset: Arc::new(dataset),
    });

    let assets_dir =
        std::env::var("FLOOD_ASSETS_DIR").unwrap_or_else(|_| DEFAULT_ASSETS_DIR.to_string());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(api_scope())
            // Serve dashboard static files
            .service(Files::new("/", assets_dir.clone()).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
