use crate::core::data::packed_colour::PackedColour;

/// Output surface shared by render workers and the presenter.
pub trait Framebuffer: Send + Sync {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Writes one pixel. May be called concurrently for distinct pixels.
    fn set_pixel(&self, x: usize, y: usize, colour: PackedColour);

    /// Pushes the current pixel state to the display surface.
    fn present(&self);

    /// Reports whether the user has asked to close the surface. Once true,
    /// stays true.
    fn poll_exit_requested(&self) -> bool;
}
