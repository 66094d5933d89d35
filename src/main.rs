//! Life Genesis CLI - Run a Game of Life epoch and narrate the outcome.

use std::fs;
use std::path::Path;
use std::time::Instant;

use life_genesis::{Session, Trail, schema::RunConfig};

/// Trail shading from faded to alive.
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("life-genesis", String::as_str);
    let (flags, positional) = split_args(&args);

    if flags.contains(&"--example") {
        print_example_config();
        return;
    }

    let random = flags.contains(&"--random");
    if !random && positional.is_empty() {
        print_usage(program);
        std::process::exit(1);
    }

    let mut config = if random {
        RunConfig::randomized(&mut rand::thread_rng())
    } else {
        load_config(Path::new(positional[0]))
    };

    let steps_arg = if random {
        positional.first()
    } else {
        positional.get(1)
    };
    if let Some(steps) = steps_arg {
        config.duration = steps.parse().unwrap_or_else(|e| {
            eprintln!("Invalid step count '{}': {}", steps, e);
            std::process::exit(1);
        });
    }

    let realtime = flags.contains(&"--realtime");
    let frame_delay = config.frame_delay();
    let duration = config.duration;

    println!("Life Genesis");
    println!("============");
    println!(
        "Grid: {}x{} (decay {})",
        config.engine.width, config.engine.height, config.engine.decay_rate
    );
    println!("Seed density: {}", config.probability);
    println!("Generations: {}", duration);
    println!("Palette: {}", config.colormap.name());
    println!();

    let mut session = Session::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!("Running simulation...");
    let start = Instant::now();

    let analysis = session
        .run(|engine| {
            let step = engine.step_count();
            if step % (duration / 10).max(1) == 0 {
                if let Some(stats) = engine.get_latest_stats() {
                    println!(
                        "  Generation {}/{}: population={}, entropy={:.4}",
                        step, duration, stats.population, stats.entropy
                    );
                }
            }
            if realtime {
                std::thread::sleep(frame_delay);
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Run failed: {}", e);
            std::process::exit(1);
        })
        .clone();

    let elapsed = start.elapsed();
    println!();

    if flags.contains(&"--ascii") {
        print_trail(session.engine().display_buffer());
        println!();
    }

    if flags.contains(&"--json") {
        let json = serde_json::to_string_pretty(&analysis).unwrap_or_else(|e| {
            eprintln!("Error encoding analysis: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
    } else {
        println!("{}", analysis.title);
        println!("{}", "-".repeat(analysis.title.len()));
        println!("{}", analysis.description);
        if let Some(metrics) = &analysis.metrics {
            println!();
            for (label, value) in metrics.entries() {
                println!("  {}: {}", label, value);
            }
        }
    }

    println!();
    println!(
        "Time: {:.2}s ({:.1} generations/s)",
        elapsed.as_secs_f32(),
        duration as f32 / elapsed.as_secs_f32()
    );
}

/// Split the arguments after the program name into `--flags` and positionals.
fn split_args(args: &[String]) -> (Vec<&str>, Vec<&str>) {
    args.iter()
        .skip(1)
        .map(String::as_str)
        .partition(|a| a.starts_with("--"))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <config.json> [steps] [--ascii] [--json] [--realtime]", program);
    eprintln!("       {} --random [steps] [--ascii] [--json] [--realtime]", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Run a toroidal Game of Life epoch and print its narrative verdict.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to run configuration file");
    eprintln!("  steps        Override the configured number of generations");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --random     Draw random run parameters instead of reading a file");
    eprintln!("  --ascii      Print the final trail as shaded text");
    eprintln!("  --json       Print the analysis as JSON");
    eprintln!("  --realtime   Pace generations at the configured speed");
    eprintln!("  --example    Print the default configuration");
}

fn load_config(path: &Path) -> RunConfig {
    let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    })
}

fn print_trail(trail: &Trail) {
    let top = (SHADES.len() - 1) as f64;
    for row in trail.values().chunks(trail.width()) {
        let line: String = row
            .iter()
            .map(|&v| SHADES[(v.clamp(0.0, 1.0) * top).round() as usize] as char)
            .collect();
        println!("{}", line);
    }
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error encoding config: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_split_args_separates_flags() {
        let args = owned(&["life-genesis", "run.json", "--ascii", "40", "--json"]);
        let (flags, positional) = split_args(&args);
        assert_eq!(flags, ["--ascii", "--json"]);
        assert_eq!(positional, ["run.json", "40"]);
    }

    #[test]
    fn test_split_args_tolerates_empty_argv() {
        let (flags, positional) = split_args(&[]);
        assert!(flags.is_empty());
        assert!(positional.is_empty());

        let argv = owned(&["life-genesis"]);
        let (flags, positional) = split_args(&argv);
        assert!(flags.is_empty());
        assert!(positional.is_empty());
    }
}
