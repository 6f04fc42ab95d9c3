//! shorturl - A small URL shortener microservice
//!
//! Accepts a URL, checks that it parses and that its host resolves, stores it
//! under a sequential numeric id and redirects `/api/shorturl/{id}` back to it.
//!
//! # Architecture
//! - `api`: HTTP handlers, routes and middleware
//! - `services`: Submission workflow and hostname resolution
//! - `storage`: SeaORM backed persistence of short URL records
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and server mode
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
