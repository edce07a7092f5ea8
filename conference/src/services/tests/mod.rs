//! Tests for conference services
