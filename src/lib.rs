//! Tours API demonstrating a single failure funnel for Axum handlers.
//!
//! Handler errors, extractor rejections, panics inside suspended handlers and
//! unmatched routes all end in [`presentation::http::error::ErrorResponder`],
//! which classifies them and answers with one `{ statusCode, message }` body.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
