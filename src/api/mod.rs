//! HTTP API: handlers and middleware

pub mod middleware;
pub mod services;
