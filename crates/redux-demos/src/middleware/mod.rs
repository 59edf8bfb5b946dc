//! Middleware installed by the `with-middleware` app

pub mod crash_reporter_middleware;
pub mod logging_middleware;

pub use crash_reporter_middleware::{CrashReport, CrashReporterMiddleware, CrashReports};
pub use logging_middleware::LoggingMiddleware;
