use crate::controllers::interactive::events::preview::PreviewEvent;

/// Receives every published preview change.
///
/// Called while the controller holds its publish lock, so implementations
/// must not call back into the controller.
pub trait PreviewPresenterPort: Send + Sync {
    fn present(&self, event: PreviewEvent);
}
