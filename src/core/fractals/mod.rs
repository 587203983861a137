pub mod mandelbrot;

pub use mandelbrot::escape_depth;
