/// Custom user events for the GUI event loop.
///
/// These events allow runtime worker threads to wake the main UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that the published preview changed.
    ///
    /// Note: Receiving this event does NOT automatically trigger a redraw.
    /// The handler must explicitly call `window.request_redraw()`.
    Wake,
}
