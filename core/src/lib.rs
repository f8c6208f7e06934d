// Core generation-cycle functionality:
// - API client for Gemini
// - Request/response data structures
// - Generation requests, prompt templates, validation
// - Panel state machine
// - Configuration loading
// - Shared error types

// Export client module - API client for Gemini
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export request module - Generation kinds, validation, prompt templates
pub mod request;
pub use request::*;

// Export panel module - Generation cycle and panel state
pub mod panel;
pub use panel::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;
