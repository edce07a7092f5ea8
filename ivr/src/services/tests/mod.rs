//! Tests for IVR services

pub mod http_resolver;
