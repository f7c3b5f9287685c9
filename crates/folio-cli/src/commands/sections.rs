use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use folio_core::config::page_sections;
use folio_core::sections::{Bounds, GeometryObserver, SectionTracker};

use super::load_config;

/// Page width used for the synthetic layout; only heights matter.
const PAGE_WIDTH: f32 = 1280.0;

/// Default section heights in page order, roughly what the GUI lays out.
const DEFAULT_HEIGHTS: &[f32] = &[720.0, 360.0, 420.0, 520.0, 620.0, 480.0, 360.0];

#[derive(Args)]
pub struct SectionsArgs {
    /// Viewport height in pixels
    #[arg(long, default_value = "800")]
    pub viewport: f32,

    /// Scroll distance between polls, in pixels
    #[arg(long, default_value = "20")]
    pub step: f32,

    /// Comma-separated section heights in page order
    #[arg(long, value_delimiter = ',')]
    pub heights: Option<Vec<f32>>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SectionsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    if args.viewport <= 0.0 || args.step <= 0.0 {
        bail!("--viewport and --step must be positive");
    }

    let ids = page_sections();
    let heights = args.heights.clone().unwrap_or_else(|| DEFAULT_HEIGHTS.to_vec());
    if heights.len() != ids.len() {
        bail!("expected {} heights ({}), got {}", ids.len(), ids.join(", "), heights.len());
    }

    let mut layout = Vec::with_capacity(ids.len());
    let mut top = 0.0;
    for (id, height) in ids.iter().zip(&heights) {
        layout.push((id.clone(), Bounds::band(top, *height, PAGE_WIDTH)));
        top += height;
    }
    let page_height = top;

    let motion = &config.motion;
    let mut observer = GeometryObserver::new(motion.ratio_basis);
    let mut tracker = SectionTracker::mount(
        &mut observer,
        &ids,
        motion.section_threshold,
        Some(motion.initial_section.clone()),
    );

    let bounds_of = |id: &str| layout.iter().find(|(name, _)| name == id).map(|(_, b)| *b);
    let max_scroll = (page_height - args.viewport).max(0.0);

    println!("{:>8}  {}", "scroll", "active");
    let mut last = tracker.active().get();
    println!("{:>8}  {}", "-", last.as_deref().unwrap_or("(none)"));

    let mut scroll = 0.0;
    let mut visited = Vec::new();
    loop {
        observer.poll(Bounds::band(scroll, args.viewport, PAGE_WIDTH), &bounds_of);
        let active = tracker.active().get();
        if active != last {
            println!("{:>8.0}  {}", scroll, active.as_deref().unwrap_or("(none)"));
            last = active;
        }
        if let Some(ref id) = last {
            if visited.last() != Some(id) {
                visited.push(id.clone());
            }
        }
        if scroll >= max_scroll {
            break;
        }
        scroll = (scroll + args.step).min(max_scroll);
    }

    tracker.unmount(&mut observer);

    let never: Vec<&str> = ids
        .iter()
        .filter(|id| !visited.contains(*id))
        .map(String::as_str)
        .collect();
    println!();
    println!("Visited: {}", visited.join(" -> "));
    if !never.is_empty() {
        println!("Never active at this viewport: {}", never.join(", "));
    }

    Ok(())
}
