// gemini-proxy - server-side relay for the generative-language API

pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod mappers;
pub mod middleware;
pub mod server;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::{AppError, AppResult};
pub use server::{build_router, AppState, AxumServer};
