//! # ferry-client
//!
//! HTTP client for OpenAI-compatible providers.
//!
//! [`OpenAiClient`] implements [`ferry_core::Provider`] against:
//! - `POST {base}/chat/completions` (plain and server-sent-event streaming)
//! - `POST {base}/images/generations`
//! - `GET  {base}/models`
//! - `POST {base}/embeddings`
//!
//! Any non-success status becomes [`ferry_core::Error::Upstream`] with the
//! status and raw body. Nothing is retried.

#![warn(clippy::all)]

pub mod client;
mod streaming;
mod wire;

pub use client::OpenAiClient;
