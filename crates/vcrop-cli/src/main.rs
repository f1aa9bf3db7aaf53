use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vcrop_controls::Timeline;
use vcrop_core::Size;
use vcrop_layout::{LayoutEngine, LayoutSpec};
use vcrop_overlay::{CropBounds, FrameFit};

#[derive(Parser, Debug)]
#[command(name = "vcrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a layout document and print every element's bounds.
    Layout(LayoutArgs),
    /// Map an overlay selection into source-frame pixels.
    Map(MapArgs),
    /// Print the timestamp and progress of a frame.
    Timecode(TimecodeArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input layout JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Resize the parent to this width before resolving.
    #[arg(long)]
    width: Option<i32>,

    /// Resize the parent to this height before resolving.
    #[arg(long)]
    height: Option<i32>,

    /// Print JSON instead of one line per element.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Source frame size, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_size)]
    source: Size,

    /// Display surface size, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_size)]
    surface: Size,

    /// Selection edges in overlay coordinates.
    #[arg(long, allow_negative_numbers = true)]
    left: i32,
    #[arg(long, allow_negative_numbers = true)]
    top: i32,
    #[arg(long, allow_negative_numbers = true)]
    right: i32,
    #[arg(long, allow_negative_numbers = true)]
    bottom: i32,

    /// Print JSON instead of `x y width height`.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TimecodeArgs {
    /// Frames per second.
    #[arg(long)]
    fps: f64,

    /// Total number of frames.
    #[arg(long)]
    frame_count: u64,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Serialize, Debug, PartialEq)]
struct ElementRow {
    id: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Map(args) => cmd_map(args),
        Command::Timecode(args) => cmd_timecode(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid extent '{part}': {e}"))
    };
    Ok(Size::new(parse(width)?, parse(height)?))
}

fn element_rows(engine: &LayoutEngine) -> anyhow::Result<Vec<ElementRow>> {
    engine
        .elements()
        .map(|element| {
            let bounds = engine
                .bounds(element.id())
                .with_context(|| format!("resolve element '{}'", element.id()))?;
            Ok(ElementRow {
                id: element.id().to_string(),
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            })
        })
        .collect()
}

fn format_rows(rows: &[ElementRow]) -> String {
    rows.iter()
        .map(|row| format!("{} {} {} {} {}\n", row.id, row.x, row.y, row.width, row.height))
        .collect()
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let spec = LayoutSpec::load(&args.in_path)
        .with_context(|| format!("load layout '{}'", args.in_path.display()))?;
    let mut engine = spec.build().with_context(|| "build layout")?;
    engine.resize_parent(args.width, args.height);
    debug!(parent = %engine.parent(), elements = spec.elements.len(), "layout resolved");

    let rows = element_rows(&engine)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_rows(&rows));
    }
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let fit = FrameFit::new(args.surface, args.source).with_context(|| "fit source frame")?;
    let bounds = CropBounds::new(args.left, args.right, args.top, args.bottom);
    debug!(placement = ?fit.placement(), ?bounds, "mapping selection");
    let region = fit.crop_region(bounds);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&region)?);
    } else {
        println!("{} {} {} {}", region.x, region.y, region.width, region.height);
    }
    Ok(())
}

fn cmd_timecode(args: TimecodeArgs) -> anyhow::Result<()> {
    let mut timeline = Timeline::new(args.fps, args.frame_count)?;
    timeline.seek(args.frame)?;
    debug!(fps = args.fps, frame = args.frame, "timecode");
    println!("{} ({:.1}%)", timeline.timestamp(), timeline.progress_percent());
    Ok(())
}
