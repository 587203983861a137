fn main() {
    let config = mandelbrot_renderer::parse_or_exit();

    mandelbrot_renderer::run_gui(config);
}
