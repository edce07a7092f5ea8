//! Service trait definitions for dependency injection

use shared::HostMessage;

use crate::error::WebServerResult;

/// Outgoing half of one page connection
#[mockall::automock]
pub trait PageSink: Send + Sync {
    /// Queue a directive for the page
    fn post(&self, message: HostMessage) -> WebServerResult<()>;
}
