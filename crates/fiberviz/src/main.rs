mod source;

use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use fiberviz_parse::Node;
use fiberviz_view::{Mode, PRESETS, Visualizer, Walk, preset, render_tree};
use source::Source;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Parse JSX-like markup into a fiber tree and walk it.
#[derive(Parser)]
#[command(version)]
enum Options {
    /// Print the tree of a markup file (`-` reads stdin).
    Tree {
        path: Utf8PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Fiber)]
        format: Format,
    },
    /// Print the order in which the nodes are visited.
    Walk {
        path: Utf8PathBuf,
        #[arg(long, value_enum, default_value_t = WalkMode::Descend)]
        mode: WalkMode,
        /// Play the steps back, pausing this long between them.
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// List the bundled examples, or print one of them.
    Example { name: Option<String> },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Nodes with their return, child and sibling pointers.
    Fiber,
    /// One node per line.
    Outline,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum WalkMode {
    Descend,
    Return,
}

impl From<WalkMode> for Mode {
    fn from(mode: WalkMode) -> Self {
        match mode {
            WalkMode::Descend => Self::Descend,
            WalkMode::Return => Self::Return,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    match Options::parse() {
        Options::Tree { path, format } => {
            let tree = Source::read(path)?.parse()?;
            print_tree(&tree, format)
        }
        Options::Walk { path, mode, interval_ms } => {
            let tree = Source::read(path)?.parse()?;
            let mut walk = Walk::new(&tree, mode.into());

            match interval_ms {
                Some(interval) => play(&mut walk, Duration::from_millis(interval)),
                None => {
                    for (index, step) in walk.steps().iter().enumerate() {
                        println!("{index:>3} {step}");
                    }
                }
            }
            Ok(())
        }
        Options::Example { name: None } => {
            for preset in &PRESETS {
                println!("{:<8}{}", preset.name, preset.title);
            }
            Ok(())
        }
        Options::Example { name: Some(name) } => {
            let Some(preset) = preset(&name) else {
                let names = PRESETS.map(|preset| preset.name).join(", ");
                bail!("unknown example `{name}`, expected one of: {names}");
            };

            let mut visualizer = Visualizer::default();
            let tree = visualizer
                .load_example(preset.source)
                .with_context(|| format!("example `{name}` did not parse"))?
                .clone();

            println!("{}\n", visualizer.input());
            print_tree(&tree, Format::Fiber)
        }
    }
}

fn print_tree(tree: &Node, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Fiber => print!("{}", render_tree(tree)),
        Format::Outline => print!("{tree}"),
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(tree).context("failed to serialize tree")?);
        }
    }
    Ok(())
}

/// Prints one pass over the walk, a step per interval.
fn play(walk: &mut Walk, interval: Duration) {
    walk.playback_mut().play();

    loop {
        if let Some(step) = walk.current() {
            println!("{:>5.1}% {step}", walk.playback().progress());
        }
        thread::sleep(interval);

        match walk.playback_mut().tick() {
            Some(0) | None => break,
            Some(_) => {}
        }
    }

    walk.playback_mut().pause();
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FIBERVIZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
