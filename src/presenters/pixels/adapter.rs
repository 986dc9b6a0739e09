use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::preview::PreviewEvent;
use crate::controllers::interactive::ports::presenter::PreviewPresenterPort;
use crate::core::util::lock::lock_unpoisoned;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::presenters::memory::artifact_store::{ArtifactStore, PublishedArtifact};

/// Receives previews on runtime threads and wakes the event loop.
pub struct PixelsAdapter {
    artifacts: ArtifactStore,
    changed: AtomicBool,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl PreviewPresenterPort for PixelsAdapter {
    fn present(&self, event: PreviewEvent) {
        self.artifacts.present(event);
        self.changed.store(true, Ordering::Release);
        let _ = lock_unpoisoned(&self.event_loop_proxy).send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            artifacts: ArtifactStore::new(),
            changed: AtomicBool::new(false),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn published(&self) -> PublishedArtifact {
        self.artifacts.snapshot()
    }

    /// Returns true once per batch of presented events.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }
}
