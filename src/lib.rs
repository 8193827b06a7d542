//! Staff console: a role-aware front end for the staff records REST API.
//!
//! This library provides:
//! - Session store and JWT sign-in against `POST token/`
//! - A single API client that attaches the bearer token to every request
//! - Role routing between the employee and admin views
//! - Ten list-and-form screens over complaints, attendance, tasks, messages
//!   and salaries
//! - Web and desktop UI (Dioxus + Pico CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between the web and desktop renderers)
pub mod app;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod router;
pub mod screen;
pub mod session;

pub use error::ApiError;
