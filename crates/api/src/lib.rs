//! HTTP API: server wiring, routing, and request/response mapping for the
//! market products catalog.

pub mod app;
pub mod config;
pub mod middleware;
