//! Builder and recorder for dial pad tests
//!
//! Every view, reporter and launcher call is appended to a shared [`Recorder`]
//! so tests can assert on the exact sequence the page would have seen.

use std::sync::{Arc, Mutex};

use ivr::*;
use shared::{Configuration, ErrorReason, RoomId};

use super::fixtures::TestFixtures;

pub type TestDialPad<R = MockRoomResolver> = DialPad<R, MockDialPadView, MockErrorReporter, MockSessionLauncher>;

/// Ordered log of collaborator calls
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.lock().unwrap().iter().any(|e| e == entry)
    }
}

pub struct DialPadBuilder {
    config: Configuration,
    resolver: MockRoomResolver,
    view: MockDialPadView,
    reporter: MockErrorReporter,
    launcher: MockSessionLauncher,
    recorder: Recorder,
}

impl DialPadBuilder {
    /// Recording view and reporter, launcher that accepts any room, no resolver expectations
    pub fn new() -> Self {
        let recorder = Recorder::default();
        let mut view = MockDialPadView::new();
        let mut reporter = MockErrorReporter::new();
        let mut launcher = MockSessionLauncher::new();

        let r = recorder.clone();
        view.expect_set_length_bounds()
            .returning(move |min, max| r.push(format!("bounds:{min}..{max}")))
            .times(0..);
        let r = recorder.clone();
        view.expect_show_container().returning(move || r.push("show_container")).times(0..);
        let r = recorder.clone();
        view.expect_hide_container().returning(move || r.push("hide_container")).times(0..);
        let r = recorder.clone();
        view.expect_show_loader().returning(move || r.push("show_loader")).times(0..);
        let r = recorder.clone();
        view.expect_hide_loader().returning(move || r.push("hide_loader")).times(0..);
        let r = recorder.clone();
        view.expect_hide_errors().returning(move || r.push("hide_errors")).times(0..);
        let r = recorder.clone();
        view.expect_clear_input().returning(move || r.push("clear_input")).times(0..);

        let r = recorder.clone();
        reporter
            .expect_render_error()
            .returning(move |reason: ErrorReason| r.push(format!("error:{reason:?}")))
            .times(0..);

        let r = recorder.clone();
        launcher
            .expect_launch()
            .returning(move |room: RoomId| {
                r.push(format!("launch:{room}"));
                Ok(())
            })
            .times(0..);

        Self {
            config: TestFixtures::ivr_config(),
            resolver: MockRoomResolver::new(),
            view,
            reporter,
            launcher,
            recorder,
        }
    }

    pub fn with_config<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut Configuration),
    {
        setup(&mut self.config);
        self
    }

    pub fn with_resolver<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockRoomResolver),
    {
        setup(&mut self.resolver);
        self
    }

    /// Resolver answering every code with `room` (or no conference)
    pub fn resolving_to(self, room: Option<&'static str>) -> Self {
        self.with_resolver(|resolver| {
            resolver
                .expect_resolve()
                .returning(move |_| Ok(room.map(|r| RoomId::new(r).unwrap())));
        })
    }

    /// Resolver that must never be called
    pub fn offline(self) -> Self {
        self.with_resolver(|resolver| {
            resolver.expect_resolve().times(0);
        })
    }

    pub fn with_launcher<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockSessionLauncher),
    {
        self.launcher = MockSessionLauncher::new();
        setup(&mut self.launcher);
        self
    }

    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }

    pub fn build(self) -> TestDialPad {
        DialPad::new(Arc::new(self.config), self.resolver, self.view, self.reporter, self.launcher)
    }

    pub fn build_with_resolver<R: RoomResolver>(self, resolver: R) -> TestDialPad<R> {
        DialPad::new(Arc::new(self.config), resolver, self.view, self.reporter, self.launcher)
    }
}

impl Default for DialPadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Type `keys` one by one
pub async fn type_keys<R: RoomResolver>(pad: &TestDialPad<R>, keys: &str) -> Vec<KeyOutcome> {
    let mut outcomes = Vec::new();
    for c in keys.chars() {
        outcomes.push(pad.on_key(Key::Char(c)).await.unwrap());
    }
    outcomes
}
