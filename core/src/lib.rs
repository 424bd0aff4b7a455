//! Synchronous API client core for the BrickByBrick fitness service.
//!
//! # Overview
//! Typed get/list/create/update/delete calls for the two remote entity
//! kinds, [`Exercise`] and [`Strategy`], over an authenticated JSON API.
//!
//! # Design
//! - `ApiClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values (host-does-IO), so request construction and
//!   status/decoding rules are testable without a network.
//! - `Transport` executes requests; `UreqTransport` is the blocking default
//!   with a fixed per-call timeout.
//! - `Session` ties an immutable `ClientConfig` to a transport and is the
//!   entry point for callers. No retries happen anywhere in this crate.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{ApiClient, API_KEY_HEADER};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ClientError, ParseIdError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::Session;
pub use transport::{Transport, UreqTransport, MAX_BODY_BYTES};
pub use types::{Entity, EntityId, Exercise, ExercisePayload, Strategy, StrategyPayload};
