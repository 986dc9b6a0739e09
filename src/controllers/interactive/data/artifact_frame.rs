use std::time::Duration;

use crate::core::data::artifact::Artifact;

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactFrame {
    pub generation: u64,
    pub artifact: Artifact,
    pub encode_duration: Duration,
}
