//! Headless client core for the Urban Dictionary v0 API.
//!
//! # Overview
//! Fetches random pages, definitions, and autocomplete suggestions, keeps the
//! latest result of each as observable session state, and splits definition
//! text into plain runs and clickable `[term]` references.
//!
//! # Design
//! - `UrbanClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `DictionaryClient` joins the two and flattens every failure into `None`.
//! - `QueryState` is one explicit session object owning the client and four
//!   result slots; consumers receive it by reference instead of through
//!   globals.
//! - `urbanize` is a pure text transform with no I/O.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;
pub mod urbanize;

pub use client::UrbanClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_QUICK_SEARCH_TERM};
pub use dictionary::DictionaryClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use state::{QueryState, Slot};
pub use transport::{Transport, UreqTransport};
pub use types::{AutoCompleteItem, AutoCompleteItemList, Definition, DefinitionList};
pub use urbanize::{render, term_at, urbanize, Segment};
