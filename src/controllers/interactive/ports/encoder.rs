use async_trait::async_trait;

use crate::controllers::interactive::errors::encode::EncodeError;
use crate::core::data::artifact::Artifact;
use crate::core::data::encode_request::EncodeRequest;

/// The external encoding collaborator.
///
/// Treated as opaque and possibly slow: the controller never aborts a call,
/// it only ignores results that arrive for a superseded generation.
#[async_trait]
pub trait QrEncoderPort: Send + Sync {
    async fn encode(&self, request: EncodeRequest) -> Result<Artifact, EncodeError>;
}
