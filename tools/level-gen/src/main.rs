//! level-gen: level document generator for the TDF tower-defense game.
//!
//! Usage:
//!   level-gen                                            # classic level on stdout
//!   level-gen generate --preset twin-assault --output data/twin.json
//!   level-gen inspect --input data/twin.json

use std::io;
use std::path::PathBuf;
use std::process;

use tdf_level::invasion::InvasionPlan;
use tdf_level::io::{load_level_from_file, write_level, write_level_to_file};
use tdf_levelgen::{generate, LevelPreset};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        // Bare invocation emits the classic level on stdout.
        None => cmd_generate(&[]),
        Some("generate") => cmd_generate(&args[2..]),
        Some("inspect") => cmd_inspect(&args[2..]),
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "level-gen: TDF level document generator\n\
         \n\
         Commands:\n\
         \n\
         generate  Generate a level document (default command)\n\
         \n\
           --preset <name>    Level preset: classic, twin-assault, onslaught\n\
                              (default: classic)\n\
           --waves <n>        Override the number of waves\n\
           --output <path>    Write to a file instead of standard output\n\
         \n\
         inspect   Summarize an existing level document\n\
         \n\
           --input <path>     Level document to inspect\n\
         \n\
         Examples:\n\
         \n\
           level-gen > data/classic.json\n\
           level-gen generate --preset onslaught --waves 12 --output data/onslaught.json\n\
           level-gen inspect --input data/onslaught.json\n"
    );
}

fn parse_preset(args: &[String]) -> LevelPreset {
    for i in 0..args.len() {
        if args[i] == "--preset" && i + 1 < args.len() {
            match LevelPreset::from_name(&args[i + 1]) {
                Some(preset) => return preset,
                None => {
                    eprintln!(
                        "Unknown preset: {} (expected classic, twin-assault, or onslaught)",
                        args[i + 1]
                    );
                    process::exit(1);
                }
            }
        }
    }
    LevelPreset::Classic
}

fn parse_waves(args: &[String]) -> Option<u32> {
    for i in 0..args.len() {
        if args[i] == "--waves" && i + 1 < args.len() {
            match args[i + 1].parse::<u32>() {
                Ok(n) => return Some(n),
                Err(_) => {
                    eprintln!("Invalid wave count: {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    None
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

// --- Generate command ---

fn cmd_generate(args: &[String]) {
    let preset = parse_preset(args);
    let mut config = preset.config();
    if let Some(waves) = parse_waves(args) {
        config.wave_count = waves;
    }

    let level = match generate(&config) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match parse_path(args, "--output") {
        Some(path) => {
            eprintln!(
                "Writing \"{}\" ({} waves, {} creeps) to {}...",
                level.name,
                level.waves.len(),
                level.total_creeps(),
                path.display()
            );
            if let Err(e) = write_level_to_file(&path, &level) {
                eprintln!("Error writing level: {e}");
                process::exit(1);
            }
            eprintln!("Done!");
        }
        None => {
            if let Err(e) = write_level(io::stdout().lock(), &level) {
                eprintln!("Error writing level: {e}");
                process::exit(1);
            }
        }
    }
}

// --- Inspect command ---

fn cmd_inspect(args: &[String]) {
    let input = match parse_path(args, "--input") {
        Some(path) => path,
        None => {
            eprintln!("Error: --input <path> is required");
            process::exit(1);
        }
    };

    let level = match load_level_from_file(&input) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error loading level: {e}");
            process::exit(1);
        }
    };

    let plan = InvasionPlan::from_level(&level);

    println!("{}", level.name);
    println!(
        "  grid:         {}x{}, goal ({}, {})",
        level.grid_size.width, level.grid_size.height, level.goal.x, level.goal.y
    );
    println!(
        "  start:        {} lives, {} money",
        level.starting_lives, level.starting_money
    );
    println!("  waves:        {}", level.waves.len());
    println!("  creeps:       {}", plan.len());
    let points: Vec<String> = plan
        .spawn_points()
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    println!("  spawn points: {}", points.join(", "));
    if let Some(last) = plan.last_moment() {
        println!("  last spawn:   {last}s");
    }
}
