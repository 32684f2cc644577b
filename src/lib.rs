//! gemini-proxy: HTTP proxy for the Google Gemini API
//!
//! Accepts a prompt over HTTP, attaches the server-held API key, forwards the
//! prompt to the Gemini generateContent endpoint, and relays the generated
//! text (or a structured error) back to the caller. Stateless; one outbound
//! call per request, no retries, no caching.

pub mod api;
pub mod config;
pub mod proxy;
pub mod upstream;

pub use config::AppConfig;
pub use proxy::run_server;
pub use upstream::GeminiClient;
