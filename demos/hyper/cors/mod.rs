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
        .origins(["localhost:*", "https://*.example.com:*"])
        .methods("GET, POST")
        .headers(["Content-Type", "X-Demo-Trace"])
        .max_age(300);

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Hyper CORS demo!",
    })
}

pub mod middleware;
