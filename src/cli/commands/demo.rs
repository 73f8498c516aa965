//! Image-processing pipeline demo
//!
//! Generates a synthetic gradient image and runs the whole engine surface
//! over it: brightness adjustment with live progress, grayscale map,
//! bright-pixel filter, average-color reduce, and a parallel sort by
//! brightness.

use std::cmp::Ordering;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::engine::ParallelEngine;

#[derive(Args)]
pub struct DemoArgs {
    /// Worker threads (0 = auto-detect)
    #[arg(short, long, default_value_t = 4)]
    pub threads: usize,

    /// Generated image width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: usize,

    /// Generated image height in pixels
    #[arg(long, default_value_t = 1000)]
    pub height: usize,

    /// Emit a machine-readable JSON summary instead of styled text
    #[arg(long)]
    pub json: bool,
}

/// RGB pixel ordered by brightness (channel sum).
#[derive(Debug, Clone, Serialize)]
pub struct Pixel {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Pixel {
    pub fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    pub fn brightness(&self) -> u32 {
        self.r + self.g + self.b
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        self.brightness() == other.brightness()
    }
}

impl Eq for Pixel {}

impl PartialOrd for Pixel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pixel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.brightness().cmp(&other.brightness())
    }
}

#[derive(Serialize)]
struct DemoSummary {
    width: usize,
    height: usize,
    pixels: usize,
    threads: usize,
    bright_pixels: usize,
    average_color: [u32; 3],
    darkest_brightness: Option<u32>,
    brightest_brightness: Option<u32>,
    sort_ms: u64,
}

pub fn execute(args: DemoArgs) -> Result<()> {
    let image = generate_image(args.width, args.height);
    let total = image.len();
    let mut engine = ParallelEngine::with_threads(image, args.threads);

    if !args.json {
        println!(
            "{} Generated {}x{} image ({} pixels), {} worker threads",
            style("❯").cyan(),
            args.width,
            args.height,
            total,
            engine.thread_count()
        );
    }

    // 1. Brightness adjustment; the progress monitor writes to stdout, so
    //    JSON mode takes the silent path instead.
    let brighten = |p: &Pixel| {
        Pixel::new(
            (p.r + 50).min(255),
            (p.g + 50).min(255),
            (p.b + 50).min(255),
        )
    };
    let brightened = if args.json {
        engine.process(brighten)?
    } else {
        println!("{} Brightness filter (parallel, with progress)", style("1.").bold());
        engine.process_with_progress(brighten)?
    };

    // 2. Grayscale conversion
    if !args.json {
        println!("{} Grayscale conversion (parallel map)", style("2.").bold());
    }
    let grayscale = engine.map(|p| {
        let gray = p.brightness() / 3;
        Pixel::new(gray, gray, gray)
    })?;

    // 3. Bright-pixel filtering
    if !args.json {
        println!("{} Bright pixel filtering (parallel filter)", style("3.").bold());
    }
    let bright = engine.filter(|p| p.brightness() > 500)?;
    if !args.json {
        println!("   {} bright pixels", style(bright.len()).yellow().bold());
    }

    // 4. Average color via channel-sum reduce
    if !args.json {
        println!("{} Average color (parallel reduce)", style("4.").bold());
    }
    let sum = engine.reduce(
        |a, b| Pixel::new(a.r + b.r, a.g + b.g, a.b + b.b),
        Pixel::new(0, 0, 0),
    )?;
    let average = if total > 0 {
        [
            sum.r / total as u32,
            sum.g / total as u32,
            sum.b / total as u32,
        ]
    } else {
        [0, 0, 0]
    };
    if !args.json {
        println!(
            "   R={} G={} B={}",
            style(average[0]).yellow(),
            style(average[1]).yellow(),
            style(average[2]).yellow()
        );
    }

    // 5. Parallel sort by brightness
    if !args.json {
        println!("{} Sorting pixels by brightness (parallel sort)", style("5.").bold());
    }
    let sort_started = Instant::now();
    engine.parallel_sort()?;
    let sort_ms = sort_started.elapsed().as_millis() as u64;

    let summary = DemoSummary {
        width: args.width,
        height: args.height,
        pixels: total,
        threads: engine.thread_count(),
        bright_pixels: bright.len(),
        average_color: average,
        darkest_brightness: engine.data().first().map(Pixel::brightness),
        brightest_brightness: engine.data().last().map(Pixel::brightness),
        sort_ms,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} Sorted {} pixels in {} ms (brightness {} -> {})",
            style("✔").green(),
            summary.pixels,
            summary.sort_ms,
            summary.darkest_brightness.unwrap_or(0),
            summary.brightest_brightness.unwrap_or(0)
        );
        println!(
            "{} Pipeline complete: {} brightened, {} grayscale, {} bright",
            style("✔").green(),
            brightened.len(),
            grayscale.len(),
            summary.bright_pixels
        );
    }

    Ok(())
}

/// Synthetic gradient image matching the demo's expectations: channels rise
/// with x, y, and x+y respectively.
fn generate_image(width: usize, height: usize) -> Vec<Pixel> {
    let mut image = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u32;
            let g = (y * 255 / height) as u32;
            let b = ((x + y) * 255 / (width + height)) as u32;
            image.push(Pixel::new(r, g, b));
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_image_has_expected_shape() {
        let image = generate_image(10, 4);
        assert_eq!(image.len(), 40);
        // Top-left corner is darkest, bottom-right brightest.
        assert_eq!(image[0].brightness(), 0);
        let last = image.last().unwrap();
        assert!(last.brightness() > 500);
    }

    #[test]
    fn pixels_order_by_brightness() {
        let dark = Pixel::new(10, 10, 10);
        let bright = Pixel::new(200, 200, 200);
        assert!(dark < bright);
        assert_eq!(Pixel::new(30, 0, 0), Pixel::new(0, 30, 0));
    }

    #[test]
    fn demo_runs_on_a_small_image() {
        let args = DemoArgs {
            threads: 2,
            width: 20,
            height: 20,
            json: true,
        };
        execute(args).unwrap();
    }
}
