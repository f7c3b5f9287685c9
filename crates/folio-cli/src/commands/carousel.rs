use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use folio_core::carousel::{self, MeasuredViewport};
use folio_core::frame_loop::FrameLoop;
use indicatif::{ProgressBar, ProgressStyle};

use super::load_config;

/// Frame interval used by `--live`, matching a 60 Hz display.
const LIVE_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Args)]
pub struct CarouselArgs {
    /// Number of frames to run
    #[arg(long, default_value = "600")]
    pub frames: usize,

    /// Scroll width of the doubled card row, in pixels
    #[arg(long, default_value = "1980")]
    pub scroll_width: f32,

    /// Override the per-frame speed from the config
    #[arg(long)]
    pub speed: Option<f32>,

    /// Hover the carousel during this frame range, e.g. 120..240
    #[arg(long, value_parser = parse_range)]
    pub pause: Option<Range<usize>>,

    /// Print the offset every N frames
    #[arg(long, default_value = "60")]
    pub every: usize,

    /// Animate a progress bar in real time instead of printing offsets
    #[arg(long)]
    pub live: bool,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_range(s: &str) -> std::result::Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected FROM..TO, got '{s}'"))?;
    let start: usize = start.trim().parse().map_err(|e| format!("bad start: {e}"))?;
    let end: usize = end.trim().parse().map_err(|e| format!("bad end: {e}"))?;
    if end < start {
        return Err(format!("range end {end} is before start {start}"));
    }
    Ok(start..end)
}

pub fn run(args: &CarouselArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let speed = args.speed.unwrap_or(config.motion.carousel_speed);
    if !speed.is_finite() || speed <= 0.0 {
        bail!("speed must be positive, got {speed}");
    }
    if !args.scroll_width.is_finite() || args.scroll_width < 0.0 {
        bail!("--scroll-width must be a non-negative number, got {}", args.scroll_width);
    }
    if args.every == 0 {
        bail!("--every must be at least 1");
    }

    let mut frames = FrameLoop::new();
    let viewport = MeasuredViewport::new(args.scroll_width);
    let mounted = carousel::mount(&mut frames, Some(viewport), speed)
        .context("Carousel did not start")?;

    let reset_point = args.scroll_width / 2.0;
    let bar = if args.live {
        let bar = ProgressBar::new(reset_point.max(1.0).round() as u64);
        bar.set_style(
            ProgressStyle::with_template("{prefix:>8} [{bar:50.cyan/blue}] {pos:>5}/{len} px {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        Some(bar)
    } else {
        println!("{:>8}  {:>10}  {}", "frame", "offset", "state");
        None
    };

    let mut wraps = 0usize;
    let mut previous = mounted.offset();
    for frame in 0..args.frames {
        let hovered = args.pause.as_ref().is_some_and(|r| r.contains(&frame));
        mounted.set_hovered(hovered);
        frames.run_frame();

        let offset = mounted.offset();
        if offset < previous {
            wraps += 1;
        }
        previous = offset;

        let state = if mounted.is_paused() { "paused" } else { "" };
        match &bar {
            Some(bar) => {
                bar.set_prefix(format!("#{frame}"));
                bar.set_position(offset.round() as u64);
                bar.set_message(state);
                std::thread::sleep(LIVE_FRAME_INTERVAL);
            }
            None if (frame + 1) % args.every == 0 => {
                println!("{:>8}  {:>10.2}  {}", frame + 1, offset, state);
            }
            None => {}
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let final_offset = mounted.offset();
    mounted.unmount(&mut frames);
    println!();
    println!(
        "{} frames at {speed} px/frame: final offset {final_offset:.2} px, {wraps} wrap(s) at {reset_point:.1} px",
        args.frames
    );

    Ok(())
}
