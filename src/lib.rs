//! # kingraph
//!
//! The KinGraph backend: a small HTTP service that tells infrastructure it is
//! alive and tells the web frontend which build it is talking to.
//!
//! ## Endpoints
//!
//! - `GET|HEAD /healthz`: liveness probe, body `ok`
//! - `GET|HEAD /api/v1/info`: `{"name":"KinGraph","version":"0.1.0","env":…}`,
//!   where `env` comes from `KIN_GRAPH_ENV` at request time
//! - `OPTIONS /*`: `204`, CORS preflight
//!
//! Every response carries fixed security headers. Requests from the local
//! frontend dev server (`http://localhost:4200`, `http://127.0.0.1:4200`) also
//! get CORS headers. Each request produces one access log line.
//!
//! ## Running
//!
//! ```rust,no_run
//! use kingraph::{Config, Server, new_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kingraph::Error> {
//!     let config = Config::load()?;
//!     Server::bind(&config.addr)?.serve(new_router()).await
//! }
//! ```
//!
//! ## Under the hood
//!
//! A thin layer over hyper: radix-tree routing via [`matchit`], one tokio
//! task per connection, async-fn middleware, and graceful shutdown on
//! SIGTERM / Ctrl-C that drains in-flight requests.

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod cors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use middleware::{Middleware, Next};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use routes::new_router;
pub use server::Server;
