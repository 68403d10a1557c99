//! # Services Module
//!
//! External service clients. The console talks to exactly one backend, over
//! HTTP; see [`api`].

pub mod api;

pub use api::ApiClient;
