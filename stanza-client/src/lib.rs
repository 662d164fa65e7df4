//! Stanza client - typed access to a Stanza NLP analysis service
//!
//! The service exposes a single endpoint, `POST /analyze`, which takes
//! `{"text": ..., "lang": ...}` and answers with a JSON array of sentences,
//! each an array of tokens.
//!
//! Flow:
//! 1. Load [`Config`] from the environment (defaults to `http://localhost:8088`)
//! 2. Build a [`StanzaClient`] and call [`StanzaClient::analyze`]
//! 3. Optionally verify the result with [`ExpectedShape::check`]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod shape;

pub use client::{RawResponse, StanzaClient};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::StanzaError;
pub use models::{word_spans, Analysis, AnalyzeRequest, StanzaToken, TokenId, WordSpan};
pub use shape::{ExpectedShape, ShapeError};
