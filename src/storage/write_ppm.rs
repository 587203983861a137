use crate::core::data::canvas::Canvas;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", canvas.width(), canvas.height())?;
    writeln!(file, "255")?;
    file.write_all(&canvas.snapshot_rgb())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::packed_colour::PackedColour;
    use std::fs;

    #[test]
    fn test_writes_header_and_raw_rgb_bytes() {
        let canvas = Canvas::new(2, 1).unwrap();
        canvas.set_pixel(0, 0, PackedColour::from_rgb(1, 2, 3));
        canvas.set_pixel(1, 0, PackedColour::from_rgb(4, 5, 6));

        let filepath = std::env::temp_dir().join("write_ppm_header_test.ppm");
        write_ppm(&canvas, &filepath).unwrap();

        let written = fs::read(&filepath).unwrap();
        fs::remove_file(&filepath).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(written, expected);
    }
}
