//! Palette treemap: Render the dominant colors of images as a treemap.
//!
//! Counts pixel colors across every image given on the command line,
//! keeps the twenty most common, and paints their share of the combined
//! palette into treemap.png in the current directory.
//!
//! Usage: palette_treemap <image> [<image> ...]

use std::env;
use std::process;

use image::{ImageBuffer, Rgb, RgbImage};
use mosaic::{weights, Treemap};

/// Canvas edge in pixels.
const DIM: u32 = 250;
/// Colors kept from the tally.
const KEEP: usize = 20;
/// Whitespace around the tiled area, in pixels.
const MARGIN: f64 = 2.0;
/// Output file, written to the working directory.
const OUTPUT: &str = "treemap.png";

fn main() -> image::ImageResult<()> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: palette_treemap <image> [<image> ...]");
        process::exit(1);
    }

    let mut pixels: Vec<[u8; 3]> = Vec::new();
    for path in &paths {
        let image = image::open(path)?.to_rgb8();
        pixels.extend(image.pixels().map(|pixel| pixel.0));
    }

    // Rank colors by frequency; the survivors' weights sum to 1.0, ready
    // for a unit-square render scaled up to the canvas below.
    let items = weights::top_weighted(weights::tally(pixels), KEEP);

    let mut canvas: RgbImage = ImageBuffer::from_pixel(DIM, DIM, Rgb([255, 255, 255]));
    let scale = f64::from(DIM) - 2.0 * MARGIN;

    Treemap::new(&items).render(|tile, color| {
        let x0 = (MARGIN + tile.x0 * scale) as u32;
        let y0 = (MARGIN + tile.y0 * scale) as u32;
        let x1 = ((MARGIN + tile.x1 * scale).ceil() as u32).min(DIM);
        let y1 = ((MARGIN + tile.y1 * scale).ceil() as u32).min(DIM);
        for y in y0..y1 {
            for x in x0..x1 {
                canvas.put_pixel(x, y, Rgb(*color));
            }
        }
    });

    canvas.save(OUTPUT)?;
    println!(
        "{OUTPUT}: top {} colors from {} image(s)",
        items.len(),
        paths.len()
    );
    Ok(())
}
