/// Escape-time iteration for one point of the complex plane.
///
/// Each step advances `z = z^2 + c` and then tests `|z|^2 > 4.0`, so the
/// returned depth is the index of the step whose update escaped. `c = (2, 2)`
/// escapes on the very first step and gets depth 0. Points still bounded
/// after `max_iterations` steps return `None`.
#[must_use]
pub fn escape_depth(cx: f64, cy: f64, max_iterations: u32) -> Option<u32> {
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;

    for depth in 0..max_iterations {
        let next_zx = zx * zx - zy * zy + cx;
        let next_zy = 2.0 * zx * zy + cy;
        zx = next_zx;
        zy = next_zy;

        if zx * zx + zy * zy > 4.0 {
            return Some(depth);
        }
    }

    None
}
