// Public exports
pub mod server;
pub use server::{bind_listener, create_router, serve, shutdown_signal, start_webhook_server};

pub mod state;
pub use state::AppState;

pub mod types;

mod handlers;
pub(crate) mod utils;
