//! Talos demo app: a status page and liveness probe for checking that a
//! deployment pipeline and load balancer route traffic to this instance.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
