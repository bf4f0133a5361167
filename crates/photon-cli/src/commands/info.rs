//! Info command

use crate::InfoArgs;
use anyhow::{Context, Result};
use photon_core::{luma_rec601, Raster};

pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let image = photon_io::read(path)
            .with_context(|| format!("Failed to load: {}", path.display()))?;
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        println!("{}", path.display());
        println!("  Size:       {}x{}", image.width(), image.height());
        println!("  Pixels:     {}", image.pixel_count());
        println!("  File size:  {}", format_size(size));

        if args.stats {
            let stats = ChannelStats::compute(&image);
            for (name, (min, max, mean)) in ["R", "G", "B", "A"].iter().zip(stats.channels) {
                println!("  {}:          min {:3}  max {:3}  mean {:.2}", name, min, max, mean);
            }
            println!("  Luma mean:  {:.2}", stats.luma_mean);
        }
    }
    Ok(())
}

/// Per-channel min, max and mean, plus mean Rec.601 luma.
struct ChannelStats {
    channels: [(u8, u8, f64); 4],
    luma_mean: f64,
}

impl ChannelStats {
    fn compute(image: &Raster) -> Self {
        let mut min = [u8::MAX; 4];
        let mut max = [0u8; 4];
        let mut sum = [0u64; 4];
        let mut luma = 0.0f64;

        for (_, _, px) in image.pixels() {
            for c in 0..4 {
                min[c] = min[c].min(px[c]);
                max[c] = max[c].max(px[c]);
                sum[c] += px[c] as u64;
            }
            luma += luma_rec601(px[0], px[1], px[2]) as f64;
        }

        if image.is_empty() {
            return Self {
                channels: [(0, 0, 0.0); 4],
                luma_mean: 0.0,
            };
        }

        let n = image.pixel_count() as f64;
        let channels = std::array::from_fn(|c| (min[c], max[c], sum[c] as f64 / n));
        Self {
            channels,
            luma_mean: luma / n,
        }
    }
}

/// Format file size for display
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut img = Raster::filled(2, 1, [10, 20, 30, 255]);
        img.set_pixel(1, 0, [30, 20, 10, 255]);
        let stats = ChannelStats::compute(&img);
        assert_eq!(stats.channels[0], (10, 30, 20.0));
        assert_eq!(stats.channels[3], (255, 255, 255.0));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
    }
}
