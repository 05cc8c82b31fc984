use std::sync::Arc;

use hostspec_cors::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions::new()
        .origins(["localhost:*", "*.example.com", "https://app.example.dev"])
        .methods(["GET", "POST"])
        .headers(["Content-Type", "X-Requested-With", "X-Demo-Trace"])
        .expose_headers(["X-Demo-Trace"])
        .max_age(600);

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
