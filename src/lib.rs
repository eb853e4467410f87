//! NewsDash - Article Intelligence Dashboard Widget
//!
//! This crate provides the in-memory model behind a news-article dashboard
//! widget. It ingests a newline-delimited JSON feed of collected article
//! records, normalizes their loose field variants into one canonical shape,
//! and exposes articles grouped by publication, a 12-bucket monthly count
//! series, and an interactive publication/expansion selection state.

pub mod aggregate;
pub mod config;
pub mod loader;
pub mod normalize;
pub mod state;
pub mod telemetry;
pub mod widget;
