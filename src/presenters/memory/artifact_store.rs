use std::sync::Mutex;
use std::time::Duration;

use crate::controllers::interactive::events::preview::PreviewEvent;
use crate::controllers::interactive::ports::presenter::PreviewPresenterPort;
use crate::core::data::artifact::Artifact;
use crate::core::util::lock::lock_unpoisoned;

/// The preview as last published: an artifact, or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishedArtifact {
    pub generation: u64,
    pub artifact: Option<Artifact>,
    pub encode_duration: Option<Duration>,
}

impl PublishedArtifact {
    /// Applies `event` unless it is older than what is already shown.
    pub fn apply(&mut self, event: PreviewEvent) -> bool {
        if event.generation() < self.generation {
            return false;
        }

        match event {
            PreviewEvent::Artifact(frame) => {
                self.generation = frame.generation;
                self.artifact = Some(frame.artifact);
                self.encode_duration = Some(frame.encode_duration);
            }
            PreviewEvent::Cleared { generation } => {
                self.generation = generation;
                self.artifact = None;
                self.encode_duration = None;
            }
        }

        true
    }
}

/// Keeps the published preview in memory for display and download.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    published: Mutex<PublishedArtifact>,
}

impl PreviewPresenterPort for ArtifactStore {
    fn present(&self, event: PreviewEvent) {
        lock_unpoisoned(&self.published).apply(event);
    }
}

impl ArtifactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Artifact> {
        lock_unpoisoned(&self.published).artifact.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> PublishedArtifact {
        lock_unpoisoned(&self.published).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::artifact_frame::ArtifactFrame;

    fn frame(generation: u64, byte: u8) -> PreviewEvent {
        PreviewEvent::Artifact(ArtifactFrame {
            generation,
            artifact: Artifact::png(vec![byte; 4], 2, 2),
            encode_duration: Duration::from_millis(5),
        })
    }

    #[test]
    fn test_starts_empty() {
        let store = ArtifactStore::new();

        assert_eq!(store.current(), None);
        assert_eq!(store.snapshot(), PublishedArtifact::default());
    }

    #[test]
    fn test_stores_latest_artifact() {
        let store = ArtifactStore::new();

        store.present(frame(1, 1));
        store.present(frame(2, 2));

        assert_eq!(store.current(), Some(Artifact::png(vec![2u8; 4], 2, 2)));
        assert_eq!(store.snapshot().generation, 2);
        assert_eq!(
            store.snapshot().encode_duration,
            Some(Duration::from_millis(5))
        );
    }

    #[test]
    fn test_cleared_event_empties_the_preview() {
        let store = ArtifactStore::new();

        store.present(frame(1, 1));
        store.present(PreviewEvent::Cleared { generation: 2 });

        assert_eq!(store.current(), None);
        assert_eq!(store.snapshot().generation, 2);
    }

    #[test]
    fn test_older_generation_is_ignored() {
        let mut published = PublishedArtifact::default();

        assert!(published.apply(frame(3, 3)));
        assert!(!published.apply(frame(2, 2)));
        assert!(!published.apply(PreviewEvent::Cleared { generation: 1 }));

        assert_eq!(published.generation, 3);
        assert_eq!(published.artifact, Some(Artifact::png(vec![3u8; 4], 2, 2)));
    }
}
