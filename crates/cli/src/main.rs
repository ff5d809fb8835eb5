//! Headless front panel for the twelve-bit simulator.
//!
//! This binary drives the engine the way the physical panel would. It performs:
//! 1. **Run:** Power on, load a RAM image, reset, flip RUN, and print OUT values until HLT.
//! 2. **Disassembly:** List the instructions in a RAM image.
//! 3. **Blank image:** Print an all-zero image sized for the configured machine.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use twelvebit_core::common::WordWidth;
use twelvebit_core::config::Config;
use twelvebit_core::isa::disasm;
use twelvebit_core::sim::image::{self, ImportStatus};
use twelvebit_core::sim::{FrameDriver, RunOutcome};
use twelvebit_core::{Engine, InputLines, Word};

#[derive(Parser, Debug)]
#[command(
    name = "panel",
    author,
    version,
    about = "Twelve-bit front-panel computer simulator",
    long_about = "Load an octal RAM image into the simulated machine and run it.\n\nExamples:\n  panel run programs/hello.ram\n  panel run adder.ram --keys 'ab' --numeric --dump\n  panel disasm programs/hello.ram\n  panel blank --config big.json"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a RAM image and run it until HLT.
    Run {
        /// RAM image file (octal text).
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the power-on noise (overrides the configuration).
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many machine cycles.
        #[arg(long, default_value_t = 1_000_000)]
        max_cycles: u64,

        /// Characters fed to the key latch, one per KEY instruction.
        #[arg(long)]
        keys: Option<String>,

        /// Print OUT values as octal numbers instead of characters.
        #[arg(long)]
        numeric: bool,

        /// Print the final machine state as JSON.
        #[arg(long)]
        dump: bool,

        /// Honor steps while halted (overrides the configuration).
        #[arg(long)]
        step_when_halted: bool,
    },

    /// Disassemble a RAM image.
    Disasm {
        /// RAM image file (octal text).
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print an all-zero RAM image for the configured machine.
    Blank {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            image,
            config,
            seed,
            max_cycles,
            keys,
            numeric,
            dump,
            step_when_halted,
        } => {
            let opts = RunOptions {
                seed,
                max_cycles,
                keys,
                numeric,
                dump,
                step_when_halted,
            };
            cmd_run(&image, config.as_deref(), &opts)
        }
        Commands::Disasm { image, config } => cmd_disasm(&image, config.as_deref()),
        Commands::Blank { config } => cmd_blank(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(p) => Config::from_json_file(p)?,
        None => Config::default(),
    };
    debug!(?config, "configuration");
    Ok(config)
}

/// Flags of the `run` command after the image and config paths.
#[derive(Debug)]
struct RunOptions {
    seed: Option<u64>,
    max_cycles: u64,
    keys: Option<String>,
    numeric: bool,
    dump: bool,
    step_when_halted: bool,
}

/// Sets one panel line high, scans, then releases it and scans again.
fn press(engine: &mut Engine, lines: &mut InputLines, button: fn(&mut InputLines) -> &mut bool) {
    *button(lines) = true;
    engine.scan_inputs(lines);
    *button(lines) = false;
    engine.scan_inputs(lines);
}

fn cmd_run(image_path: &Path, config: Option<&Path>, opts: &RunOptions) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(config)?;
    if opts.seed.is_some() {
        config.general.seed = opts.seed;
    }
    if opts.step_when_halted {
        config.general.step_when_halted = true;
    }

    let mut engine = Engine::new(&config)?;
    let mut lines = InputLines {
        on: true,
        ..InputLines::default()
    };
    engine.scan_inputs(&lines);

    let text = fs::read_to_string(image_path)?;
    match image::import_ram(&mut engine, &text) {
        ImportStatus::Loaded(n) => {
            println!("[*] Loaded {n} words from {}", image_path.display());
        }
        status => return Err(format!("cannot import {}: {status}", image_path.display()).into()),
    }

    press(&mut engine, &mut lines, |l| &mut l.reset);
    lines.run = true;
    engine.scan_inputs(&lines);

    let mut driver = FrameDriver::new(&config.driver);
    if let Some(keys) = &opts.keys {
        driver.queue_keys(keys.chars().map(|c| c as u32 as Word));
    }
    info!(max_cycles = opts.max_cycles, keys = driver.pending_keys(), "running");
    let report = driver.run_until_halt(&mut engine, opts.max_cycles);

    let digits = engine.width().octal_digits();
    if opts.numeric {
        for value in &report.outputs {
            println!("{value:0digits$o}");
        }
    } else {
        let text: String = report
            .outputs
            .iter()
            .filter_map(|&v| char::from_u32(u32::from(v)))
            .collect();
        println!("{text}");
    }

    match report.outcome {
        RunOutcome::Halted => println!(
            "[*] Halted at PC {:0digits$o} after {} machine cycles",
            engine.regs.pc, report.cycles
        ),
        RunOutcome::Idle => println!("[*] Stopped after {} machine cycles", report.cycles),
        RunOutcome::CycleLimit => println!(
            "[!] Cycle limit of {} reached without HLT",
            opts.max_cycles
        ),
    }

    if opts.dump {
        println!("{}", engine.snapshot().to_json()?);
    }
    engine.stats.print();

    if report.outcome == RunOutcome::CycleLimit {
        process::exit(2);
    }
    Ok(())
}

fn cmd_disasm(image_path: &Path, config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?;
    let width: WordWidth = config.machine.word_width()?;
    let text = fs::read_to_string(image_path)?;
    let words: Vec<Word> = image::parse_image(&text, width.octal_digits())
        .into_iter()
        .map(|v| width.truncate(v))
        .collect();
    if words.is_empty() {
        return Err(format!("{}: {}", image_path.display(), ImportStatus::NoValidData).into());
    }
    for line in disasm::listing(&words, width) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_blank(config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?;
    let width = config.machine.word_width()?;
    let zeros = vec![0; config.machine.ram_words];
    println!("{}", image::format_words(&zeros, width.octal_digits()));
    Ok(())
}
