//! Common test utilities for dial pad tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{DialPadBuilder, Recorder, TestDialPad, type_keys};
