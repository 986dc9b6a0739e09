use crate::controllers::interactive::data::artifact_frame::ArtifactFrame;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    /// A fresh artifact for the current generation.
    Artifact(ArtifactFrame),
    /// Content became empty; nothing should be shown or downloaded.
    Cleared { generation: u64 },
}

impl PreviewEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Artifact(frame) => frame.generation,
            Self::Cleared { generation } => *generation,
        }
    }
}
