use image::GrayImage;
use softstrip::{geometry, to_luma, Config};
use std::env;

/// Horizontal size of one cell in the output image.
const CELL_PIXELS: usize = 8;

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: cargo run --example render_png <INPUT> <OUTPUT.png> [DENSITY]");
        return;
    }

    let data = match std::fs::read(&args[1]) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: can't read {}: {}", args[1], e);
            return;
        }
    };
    let level = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2);

    let strip = match Config::from_slider(level).encode(&data) {
        Ok(strip) => strip,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let row_pixels = (CELL_PIXELS as f64 * geometry::row_height_ratio()).round() as usize;
    let raster = to_luma(&strip, CELL_PIXELS, row_pixels);
    let width = (strip.pixel_width() * CELL_PIXELS) as u32;
    let height = (strip.rows() * row_pixels) as u32;

    let image = match GrayImage::from_raw(width, height, raster) {
        Some(image) => image,
        None => {
            eprintln!("Error: raster does not match {}x{}", width, height);
            return;
        }
    };

    match image.save(&args[2]) {
        Ok(_) => println!(
            "{} rows, {} bytes per row, {:.2} mm per row -> {}",
            strip.rows(),
            strip.byte_width(),
            strip.bit_height_mm(),
            args[2]
        ),
        Err(e) => eprintln!("Error: can't write {}: {}", args[2], e),
    }
}
