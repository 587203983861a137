use crate::core::data::view_params::ViewParams;

/// Maps a pixel column to the real coordinate of its sample point.
///
/// Column 0 lands on `x_min` and the last column lands exactly on `x_max`.
/// A one-column image collapses to the view centre.
#[must_use]
pub fn column_to_re(view: &ViewParams, image_width: usize, col: usize) -> f64 {
    if image_width <= 1 {
        return view.center_x();
    }

    let step = col as f64 / (image_width - 1) as f64;

    view.x_min() + (view.x_max() - view.x_min()) * step
}

/// Maps a pixel row to the imaginary coordinate of its sample point.
///
/// Row 0 lands on `y_min` and the last row lands exactly on `y_max`.
#[must_use]
pub fn row_to_im(view: &ViewParams, image_height: usize, row: usize) -> f64 {
    if image_height <= 1 {
        return view.center_y();
    }

    let step = row as f64 / (image_height - 1) as f64;

    view.y_min() + (view.y_max() - view.y_min()) * step
}
