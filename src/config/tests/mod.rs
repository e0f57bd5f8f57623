//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `precedence`: How defaults, file, environment, and CLI layers combine
//! - `field_resolution`: Path, emotion, date, and policy resolution tests
