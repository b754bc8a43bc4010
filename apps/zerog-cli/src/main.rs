use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zerog_common::{ControllerState, Intent, PointerEvent, PointerPhase};
use zerog_config::ZerogConfig;
use zerog_kernel::{FrameLoop, Simulation};
use zerog_render::{DebugTextRenderer, RenderView, Renderer};
use zerog_tools::SimInspector;

#[derive(Parser)]
#[command(name = "zerog-cli", about = "CLI tool for the zero-g station")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the simulation headless with keys held down
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        ticks: u64,
        /// Key codes held for the whole run, e.g. KeyW,Space
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Horizontal drag in pixels applied before the first frame
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        drag: f32,
        /// Print one JSON trace point per frame instead of text
        #[arg(long)]
        json: bool,
    },
    /// Record a scripted run and check that replaying it matches
    Replay {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Intent held for each block of ticks, cycled in order
        #[arg(short, long, value_delimiter = ',', value_parser = parse_intent)]
        intents: Vec<Intent>,
    },
    /// Validate a config file
    Validate {
        /// Config file to check
        path: PathBuf,
    },
    /// Print the default config as YAML
    DefaultConfig,
}

fn parse_intent(name: &str) -> Result<Intent, String> {
    Intent::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Intent::ALL.iter().map(|i| i.name()).collect();
        format!("unknown intent '{name}', expected one of {}", known.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("zerog-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", zerog_common::crate_info());
            println!("input: {}", zerog_input::crate_info());
            println!("render: {}", zerog_render::crate_info());
            println!("tools: {}", zerog_tools::crate_info());
            let config = ZerogConfig::default();
            println!(
                "kernel: spawn={} rooms={} bindings={}",
                config.simulation.spawn,
                config.simulation.station.rooms.len(),
                config.bindings.len()
            );
        }
        Commands::Run {
            ticks,
            keys,
            drag,
            json,
        } => {
            let config = zerog_config::load_or_default(cli.config.as_deref())?;
            let (mut frame_loop, input) =
                FrameLoop::new(Simulation::new(config.simulation), config.bindings);

            for code in &keys {
                input.key(code, true);
            }
            if drag != 0.0 {
                input.pointer(PointerEvent::touch(PointerPhase::Start, 0.0, 0.0));
                input.pointer(PointerEvent::touch(PointerPhase::Move, drag, 0.0));
                input.pointer(PointerEvent::touch(PointerPhase::End, drag, 0.0));
            }

            let renderer = DebugTextRenderer::new();
            let view = RenderView::default();
            for _ in 0..ticks {
                let pose = frame_loop.frame();
                let sim = frame_loop.simulation();
                if json {
                    println!("{}", serde_json::to_string(&SimInspector::trace_point(sim))?);
                } else {
                    println!("{:>5} {}", sim.tick(), renderer.render(&pose, &view));
                }
            }
            if !json {
                println!("{}", SimInspector::summary(frame_loop.simulation()));
            }
        }
        Commands::Replay { ticks, intents } => {
            let config = zerog_config::load_or_default(cli.config.as_deref())?;
            let script = if intents.is_empty() {
                Intent::ALL.to_vec()
            } else {
                intents
            };
            println!("Deterministic replay: ticks={ticks}, script={script:?}");

            // Run 1
            let mut original = Simulation::recorded(config.simulation.clone());
            original.pointer(&PointerEvent::touch(PointerPhase::Start, 0.0, 0.0));
            original.pointer(&PointerEvent::touch(PointerPhase::Move, 40.0, -20.0));
            original.end_drag();
            for tick in 0..ticks {
                let intent = script[(tick / 20) as usize % script.len()];
                original.step(ControllerState::default().with(intent));
            }

            // Replay from events
            let replayed = Simulation::replay(config.simulation, original.events());

            let contacts = SimInspector::contacts(original.events());
            println!("Run 1:  {}", SimInspector::summary(&original));
            println!("Replay: {}", SimInspector::summary(&replayed));
            println!(
                "Contacts: x={} y={} z={} events={}",
                contacts.x,
                contacts.y,
                contacts.z,
                original.events().len()
            );
            let matched = original.state_hash() == replayed.state_hash();
            println!(
                "Match: {} ({:#018x})",
                if matched { "OK" } else { "MISMATCH" },
                original.state_hash()
            );
            if !matched {
                anyhow::bail!("replay diverged from the recorded run");
            }
        }
        Commands::Validate { path } => {
            let config = zerog_config::load_from_path(&path)?;
            println!(
                "{}: OK ({} rooms, {} bindings)",
                path.display(),
                config.simulation.station.rooms.len(),
                config.bindings.len()
            );
        }
        Commands::DefaultConfig => {
            print!("{}", zerog_config::default_config_yaml());
        }
    }

    Ok(())
}
