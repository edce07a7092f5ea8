//! Dial pad DOM owned by the page

use std::sync::Arc;

use ivr::{DialPadView, ErrorReporter};
use shared::{ErrorReason, HostMessage, UiElement};

use super::deliver;
use crate::traits::PageSink;

#[derive(Clone)]
pub struct PageView {
    sink: Arc<dyn PageSink>,
}

impl PageView {
    pub fn new(sink: Arc<dyn PageSink>) -> Self {
        Self { sink }
    }

    fn post(&self, message: HostMessage) {
        deliver(self.sink.as_ref(), message);
    }
}

impl DialPadView for PageView {
    fn set_length_bounds(&self, min: usize, max: usize) {
        self.post(HostMessage::SetLengthBounds { min, max });
    }

    fn show_container(&self) {
        self.post(HostMessage::show(UiElement::IvrContainer));
    }

    fn hide_container(&self) {
        self.post(HostMessage::hide(UiElement::IvrContainer));
    }

    fn show_loader(&self) {
        self.post(HostMessage::show(UiElement::Loader));
    }

    fn hide_loader(&self) {
        self.post(HostMessage::hide(UiElement::Loader));
    }

    fn hide_errors(&self) {
        self.post(HostMessage::hide(UiElement::Errors));
    }

    fn clear_input(&self) {
        self.post(HostMessage::ClearInput);
    }
}

impl ErrorReporter for PageView {
    fn render_error(&self, reason: ErrorReason) {
        self.post(HostMessage::RenderError { reason });
    }
}
