pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use config::Config;
pub use state::AppState;
