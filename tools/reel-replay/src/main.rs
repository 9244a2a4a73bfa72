//! reel-replay: run a headless fishing minigame session from the command line.
//!
//! Usage:
//!   reel-replay run --seed 7 --steps 900 --policy track
//!   reel-replay run --catalog lake.json --fish pike
//!   reel-replay tunables > tunables.json

use std::path::PathBuf;
use std::process;

use reelcheck_core::catalog::FishCatalog;
use reelcheck_core::config::{FishParams, MinigameTunables, Modifiers};
use reelcheck_core::constants::DT;
use reelcheck_core::state::MinigameSnapshot;
use reelcheck_sim::{Minigame, SimConfig};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "tunables" => cmd_tunables(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "reel-replay: headless fishing minigame runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run one session and print a JSON snapshot per step\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --steps <N>        Maximum steps (default: 1200)\n\
           --dt <S>           Seconds per step (default: 1/60)\n\
           --policy <P>       idle | hold | track (default: track)\n\
           --catalog <path>   Fish catalog JSON\n\
           --fish <id>        Fish from the catalog (default: weighted pick)\n\
           --tunables <path>  Tunables JSON (default: built-in)\n\
         \n\
         tunables  Print the default tunables as JSON\n\
         \n\
         Set RUST_LOG=debug to trace fish state changes.\n"
    );
}

/// How the simulated player drives the reel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    Idle,
    Hold,
    /// Reel while the fish is above the hook.
    Track,
}

impl Policy {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(Self::Idle),
            "hold" => Some(Self::Hold),
            "track" => Some(Self::Track),
            _ => None,
        }
    }

    fn reel(self, snapshot: &MinigameSnapshot) -> bool {
        match self {
            Self::Idle => false,
            Self::Hold => true,
            Self::Track => snapshot.fish_position > snapshot.hook_position,
        }
    }
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got `{raw}`");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn read_file(path: &PathBuf) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn load_tunables(args: &[String]) -> MinigameTunables {
    let Some(path) = parse_value(args, "--tunables").map(PathBuf::from) else {
        return MinigameTunables::default();
    };
    match serde_json::from_str::<MinigameTunables>(&read_file(&path)) {
        Ok(tunables) => tunables,
        Err(e) => {
            eprintln!("Error parsing tunables {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn load_catalog(args: &[String]) -> Option<FishCatalog> {
    let path = PathBuf::from(parse_value(args, "--catalog")?);
    match FishCatalog::from_json(&read_file(&path)) {
        Ok(catalog) => {
            log::debug!(
                "Loaded catalog `{}` with {} fish from {}",
                catalog.origin_id,
                catalog.entries.len(),
                path.display()
            );
            Some(catalog)
        }
        Err(e) => {
            eprintln!("Error loading catalog {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seed = parse_number(args, "--seed", 42u64);
    let steps = parse_number(args, "--steps", 1200u64);
    let dt = parse_number(args, "--dt", DT);
    let policy_name = parse_value(args, "--policy").unwrap_or("track");
    let Some(policy) = Policy::parse(policy_name) else {
        eprintln!("Error: unknown policy `{policy_name}` (expected idle, hold or track)");
        process::exit(1);
    };

    let tunables = load_tunables(args);
    let mut game = Minigame::new(SimConfig { seed, tunables });
    let modifiers = Modifiers::default();

    let started = match (load_catalog(args), parse_value(args, "--fish")) {
        (Some(catalog), Some(fish_id)) => game
            .start_from_catalog(&catalog, fish_id, modifiers)
            .map(|()| fish_id.to_string()),
        (Some(catalog), None) => game.start_random(&catalog, modifiers),
        (None, Some(_)) => {
            eprintln!("Error: --fish requires --catalog");
            process::exit(1);
        }
        (None, None) => game
            .start(FishParams::default(), modifiers)
            .map(|()| FishParams::default().id),
    };
    let fish_id = match started {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error starting session: {e}");
            process::exit(1);
        }
    };

    eprintln!("Seed {seed}, fish `{fish_id}`, policy {policy:?}, dt {dt}");

    let mut snapshot = game.snapshot();
    for _ in 0..steps {
        snapshot = match game.step(dt, policy.reel(&snapshot)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error stepping session: {e}");
                process::exit(1);
            }
        };
        print_json(&snapshot);
        for event in game.drain_events() {
            print_json(&event);
        }
        if snapshot.phase.is_finished() {
            break;
        }
    }

    eprintln!(
        "Done: {:?} after {} steps ({:.2}s), progress {:+.3}",
        snapshot.phase, snapshot.step, snapshot.elapsed_secs, snapshot.progress
    );
}

// --- Tunables command ---

fn cmd_tunables() {
    match serde_json::to_string_pretty(&MinigameTunables::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing tunables: {e}");
            process::exit(1);
        }
    }
}
