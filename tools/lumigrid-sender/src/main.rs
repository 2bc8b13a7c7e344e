//! Lumigrid Frame Sender
//!
//! Renders test patterns and streams them as raw frames to a Lumigrid
//! receiver, or to a file for inspection.
//!
//! # Usage
//!
//! ```bash
//! # Rainbow on the default 20x10 grid over a serial port (serial feature)
//! lumigrid-sender send --port /dev/ttyACM0
//!
//! # Panels wired in vertical hooks, driver wants GBR
//! lumigrid-sender send -p /dev/ttyACM0 --topology column-serpentine --order gbr
//!
//! # Stop for 1.5 s after every 100 frames to watch the grid blank
//! lumigrid-sender send -p /dev/ttyACM0 --pause-after 100 --pause-ms 1500
//!
//! # One ramp frame to a file
//! lumigrid-sender send --pattern ramp --frames 1 --output ramp.bin
//!
//! # List serial ports (serial feature)
//! lumigrid-sender ports
//! ```

mod patterns;
mod sink;
mod stream;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lumigrid_protocol::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use lumigrid_protocol::{ChannelOrder, FrameEncoder, GridGeometry, Topology};
#[cfg(feature = "serial")]
use lumigrid_protocol::DEFAULT_BAUDRATE;

use patterns::{Pattern, Rgb};
use sink::{FrameSink, WriterSink};
use stream::Schedule;

/// Lumigrid Frame Sender
#[derive(Parser)]
#[command(name = "lumigrid-sender")]
#[command(version)]
#[command(about = "Stream test-pattern frames to a Lumigrid LED grid")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a pattern and stream it
    Send(SendArgs),

    /// List available serial ports
    #[cfg(feature = "serial")]
    Ports,
}

#[derive(clap::Args)]
struct SendArgs {
    /// Grid width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Grid height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Pattern: rainbow, two-axis, ramp, solid, blank
    #[arg(long, default_value = "rainbow")]
    pattern: String,

    /// Colour for the solid pattern
    #[arg(long, default_value = "255,255,255")]
    color: Rgb,

    /// Channel order on the wire: rgb, rbg, grb, gbr, brg, bgr
    #[arg(long, default_value = "rgb")]
    order: ChannelOrder,

    /// Strip layout: row-major, row-serpentine, column-serpentine
    #[arg(long, default_value = "row-major")]
    topology: Topology,

    /// Delay between frames
    #[arg(long, default_value_t = 20)]
    interval_ms: u64,

    /// Frames to send (0 = forever)
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Go silent after every N frames
    #[arg(long)]
    pause_after: Option<u64>,

    /// Length of each silence
    #[arg(long, default_value_t = 1500)]
    pause_ms: u64,

    /// Serial port path (e.g., /dev/ttyACM0)
    #[cfg(feature = "serial")]
    #[arg(short, long, conflicts_with = "output")]
    port: Option<String>,

    /// Baud rate
    #[cfg(feature = "serial")]
    #[arg(short, long, default_value_t = DEFAULT_BAUDRATE)]
    baud: u32,

    /// Write frames to a file instead (`-` for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Send(args) => handle_send(args),
        #[cfg(feature = "serial")]
        Commands::Ports => sink::print_ports(),
    }
}

fn handle_send(args: SendArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("Grid must be at least 1x1 (got {}x{})", args.width, args.height);
    }

    let pattern = Pattern::from_name(&args.pattern, args.color.0)?;
    let encoder = FrameEncoder::new(GridGeometry::new(args.width, args.height))
        .with_order(args.order)
        .with_topology(args.topology);
    let schedule = Schedule {
        interval: Duration::from_millis(args.interval_ms),
        frames: args.frames,
        pause_after: args.pause_after,
        pause: Duration::from_millis(args.pause_ms),
    };

    log::debug!(
        "Grid {}x{}, order {}, topology {}",
        args.width,
        args.height,
        args.order.name(),
        args.topology.name()
    );

    let mut sink = open_sink(&args)?;
    stream::run(sink.as_mut(), pattern, &encoder, &schedule, std::thread::sleep)?;
    Ok(())
}

fn open_sink(args: &SendArgs) -> Result<Box<dyn FrameSink>> {
    #[cfg(feature = "serial")]
    let port = args.port.as_deref();
    #[cfg(not(feature = "serial"))]
    let port: Option<&str> = None;

    match (port, &args.output) {
        #[cfg(feature = "serial")]
        (Some(port), _) => Ok(Box::new(sink::SerialSink::open(port, args.baud)?)),
        (_, Some(path)) => Ok(Box::new(WriterSink::create(path)?)),
        _ => bail!("No destination: use --port (serial feature) or --output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_send_defaults() {
        let cli = Cli::try_parse_from(["lumigrid-sender", "send", "--output", "-"]).unwrap();
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!((args.width, args.height), (20, 10));
        assert_eq!(args.order, ChannelOrder::Rgb);
        assert_eq!(args.topology, Topology::RowMajor);
        assert_eq!(args.interval_ms, 20);
        assert_eq!(args.frames, 0);
        assert_eq!(args.pause_after, None);
    }

    #[test]
    fn test_send_parses_layout_options() {
        let cli = Cli::try_parse_from([
            "lumigrid-sender",
            "send",
            "--order",
            "GBR",
            "--topology",
            "column-serpentine",
            "--pattern",
            "solid",
            "--color",
            "1,2,3",
            "--output",
            "frames.bin",
        ])
        .unwrap();
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.order, ChannelOrder::Gbr);
        assert_eq!(args.topology, Topology::ColumnSerpentine);
        assert_eq!(args.color, Rgb([1, 2, 3]));
    }

    #[test]
    fn test_send_rejects_unknown_order() {
        let result =
            Cli::try_parse_from(["lumigrid-sender", "send", "--order", "rgbw", "--output", "-"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_handle_send_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramp.bin");
        let cli = Cli::try_parse_from([
            "lumigrid-sender",
            "send",
            "--pattern",
            "ramp",
            "--frames",
            "2",
            "--interval-ms",
            "0",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };

        handle_send(args).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 1200);
        assert_eq!(bytes[599], (599 % 256) as u8);
        assert_eq!(bytes[600], 0);
    }
}
