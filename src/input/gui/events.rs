/// Custom user events for the GUI event loop.
///
/// These events let the render session's presenter thread wake the main
/// UI thread so it can copy the canvas to the window surface.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that the canvas may hold newer pixels worth drawing.
    ///
    /// Note: receiving this event does NOT automatically trigger a redraw.
    /// The handler must explicitly call `window.request_redraw()`.
    Wake,
}
