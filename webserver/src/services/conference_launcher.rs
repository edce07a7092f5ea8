//! Hands resolved rooms to the conference session

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use conference::WidgetOverrides;
use ivr::{IvrError, IvrResult, SessionLauncher};
use shared::{HostMessage, RoomId, WidgetContainer};

use super::deliver;
use crate::traits::PageSink;
use crate::types::PageSession;

/// Titles the page after the room and creates its widget under the fixed policy
pub struct ConferenceLauncher {
    session: Arc<PageSession>,
    container: Arc<RwLock<WidgetContainer>>,
    sink: Arc<dyn PageSink>,
}

impl ConferenceLauncher {
    pub fn new(session: Arc<PageSession>, container: Arc<RwLock<WidgetContainer>>, sink: Arc<dyn PageSink>) -> Self {
        Self {
            session,
            container,
            sink,
        }
    }
}

#[async_trait]
impl SessionLauncher for ConferenceLauncher {
    async fn launch(&self, room: RoomId) -> IvrResult<()> {
        deliver(
            self.sink.as_ref(),
            HostMessage::SetTitle {
                title: room.to_string(),
            },
        );

        let container = self
            .container
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        self.session
            .create_widget(room, &container, WidgetOverrides::default())
            .await
            .map_err(|e| IvrError::LaunchFailed { reason: e.to_string() })
    }
}
