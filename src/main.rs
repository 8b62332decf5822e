//! KinGraph backend entry point.
//!
//! ```text
//! KIN_GRAPH_ADDR=127.0.0.1:8080 KIN_GRAPH_ENV=dev RUST_LOG=info cargo run
//! curl -i http://127.0.0.1:8080/api/v1/info
//! ```

use kingraph::{Config, Server, new_router};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<(), kingraph::Error> {
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Server::bind(&config.addr)?.serve(new_router()).await
}
