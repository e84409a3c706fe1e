//! Error types for the ldash application.
//!
//! The taxonomy mirrors the recovery paths of the UI:
//!
//! - [`FetchError`] - backend HTTP/decode failures. Recovered inline by the
//!   owning view: the last-good collection stays on screen and a retry
//!   affordance is shown. Never crashes a view.
//! - [`RenderFault`] - a failure raised while producing UI from state.
//!   Caught only by the nearest enclosing error boundary, which substitutes
//!   a recovery screen.
//! - [`AppError`] - top-level sum wrapping everything that can escape the
//!   main loop (terminal I/O being the only genuinely fatal case).
//!
//! Pagination and export edge cases are deliberately absent: out-of-range
//! pages clamp and empty exports succeed, so neither is an error.

use thiserror::Error;

/// Top-level application error.
///
/// All domain errors convert into `AppError` via `From`, enabling clean `?`
/// propagation out of the main loop. Only terminal errors are fatal; fetch
/// errors are handled inline by views and render faults by boundaries long
/// before they could reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load a collection from the backend.
    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] FetchError),

    /// A render pass failed and no boundary caught it.
    ///
    /// Reaching the main loop with a render fault means the outermost
    /// boundary itself is broken; treated as fatal.
    #[error("Unrecovered render fault: {0}")]
    Render(#[from] RenderFault),

    /// Terminal or TUI I/O error (raw mode, alternate screen, draw).
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading a collection from the backend.
///
/// A fetch failure leaves the owning view's previous collection intact; the
/// error is surfaced as an inline status with a retry affordance, distinct
/// from an empty collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status code.
    #[error("Backend returned HTTP {status} for {endpoint}")]
    Status {
        /// HTTP status code from the response.
        status: u16,
        /// The endpoint path that was requested.
        endpoint: String,
    },

    /// The response body was not the JSON shape we expected.
    ///
    /// Field-level oddities (missing numbers, embedded percent signs) are
    /// coerced at ingestion and never produce this error; only a body that
    /// is not a JSON array/object of the expected top-level shape does.
    #[error("Failed to decode {endpoint} response: {reason}")]
    Decode {
        /// The endpoint path whose body failed to decode.
        endpoint: String,
        /// Decoder error detail.
        reason: String,
    },
}

/// A failure raised while rendering a view subtree.
///
/// Carries the originating subtree name and a message. Caught by the nearest
/// [`crate::view::Boundary`]; the fault value is retained for diagnostic
/// display, which is gated behind the development-mode flag. Production
/// rendering shows only a generic recovery screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render fault in {origin}: {message}")]
pub struct RenderFault {
    /// Name of the subtree that failed (e.g. "supplier-detail").
    pub origin: &'static str,
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl RenderFault {
    /// Create a fault originating from the named subtree.
    pub fn new(origin: &'static str, message: impl Into<String>) -> Self {
        Self {
            origin,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fetch_error_network_display() {
        let err = FetchError::Network("connection refused".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Network error"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn fetch_error_status_display() {
        let err = FetchError::Status {
            status: 503,
            endpoint: "/supplier-scores".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/supplier-scores"));
    }

    #[test]
    fn fetch_error_decode_display() {
        let err = FetchError::Decode {
            endpoint: "/cost-analysis".to_string(),
            reason: "expected array".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cost-analysis"));
        assert!(msg.contains("expected array"));
    }

    #[test]
    fn render_fault_display_names_origin() {
        let fault = RenderFault::new("supplier-detail", "score out of range");
        let msg = fault.to_string();
        assert!(msg.contains("supplier-detail"));
        assert!(msg.contains("score out of range"));
    }

    #[test]
    fn app_error_from_fetch_error() {
        let err: AppError = FetchError::Network("timeout".to_string()).into();
        assert!(err.to_string().contains("Failed to fetch data"));
    }

    #[test]
    fn app_error_from_render_fault() {
        let err: AppError = RenderFault::new("cost-table", "bad row").into();
        let msg = err.to_string();
        assert!(msg.contains("Unrecovered render fault"));
        assert!(msg.contains("cost-table"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AppError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
