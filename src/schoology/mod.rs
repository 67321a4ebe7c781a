//! Schoology REST API client.

mod client;
mod oauth1;

pub use client::SchoologyClient;
