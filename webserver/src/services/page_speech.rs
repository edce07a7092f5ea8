//! Speech synthesis done by the page

use std::sync::Arc;

use conference::SpeechSynthesizer;
use shared::HostMessage;

use super::deliver;
use crate::traits::PageSink;

/// One `speak` directive per utterance
pub struct PageSpeechSynthesizer {
    sink: Arc<dyn PageSink>,
    lang: Option<String>,
}

impl PageSpeechSynthesizer {
    pub fn new(sink: Arc<dyn PageSink>, lang: Option<String>) -> Self {
        Self { sink, lang }
    }
}

impl SpeechSynthesizer for PageSpeechSynthesizer {
    fn speak(&self, text: &str) {
        deliver(
            self.sink.as_ref(),
            HostMessage::Speak {
                text: text.to_string(),
                lang: self.lang.clone(),
            },
        );
    }
}
