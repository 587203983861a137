fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = mandelbrot_renderer::parse_or_exit();

    mandelbrot_renderer::run_headless(config)
}
