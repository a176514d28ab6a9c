//! Async client for the DefiLlama analytics API.
//!
//! One method per endpoint, one GET per call, untyped JSON out. Responses
//! keep the shape the server sent; row-like payloads can be projected into a
//! [`Frame`]. Failures come back as classified [`Error`] values and are
//! additionally logged once through `tracing`.
//!
//! ```no_run
//! use defillama::DefiLlama;
//!
//! # async fn run() -> Result<(), defillama::Error> {
//! let client = DefiLlama::new();
//! let protocols = client.protocols().await?;
//! println!("{} protocols", protocols.as_array().map_or(0, Vec::len));
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod dispatch;
mod error;
mod frame;

pub use client::{BaseUrls, DefiLlama};
pub use dispatch::{Dispatcher, RequestOptions};
pub use error::Error;
pub use frame::Frame;
