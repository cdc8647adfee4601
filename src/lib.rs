//! HTTP/JSON access layer over a key-value store.
//!
//! `GET /key/{key}`, `POST /key` and `DELETE /key/{key}` are translated into
//! calls on a [`Store`]; see [`Service`] for running it on a socket.

pub mod api_doc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use service::{router, Service};
pub use store::{MemoryStore, Store};
