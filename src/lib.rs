// Inkguard: Zero-PII author display and submission integrity
//
// This is the library root. The sanitize and integrity modules are pure
// functions; everything else wires them to configuration, the terminal,
// the external reviewer and (optionally) an HTTP API.

pub mod config;
pub mod integrity;
pub mod models;
pub mod output;
pub mod review;
pub mod sanitize;

#[cfg(feature = "web")]
pub mod web;
