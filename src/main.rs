use detective_quest::console_terminal::TerminalConsole;
use detective_quest::{Game, Settings};
use log::{debug, info};
use std::env;
use std::path::PathBuf;

fn print_usage(program: &str) {
    println!("detective-quest - explore the mansion, collect clues, accuse the culprit");
    println!();
    println!("Usage: {} [--config <settings.toml>]", program);
    println!();
    println!("Settings file keys (all optional):");
    println!("  accusation_threshold = 2   clues needed for the accusation to stand");
    println!("  show_banner = true         print the title banner");
    println!("  list_suspects = false      list suspects before the accusation");
    println!("  echo_input = false         echo piped input lines to stdout");
    println!();
    println!("Set RUST_LOG=debug to trace the game on stderr.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("detective-quest");

    let mut config_path: Option<PathBuf> = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return Ok(());
            }
            "--config" => match rest.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config needs a file path");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Error: unknown argument '{}'", other);
                eprintln!();
                print_usage(program);
                std::process::exit(1);
            }
        }
    }

    let settings = match config_path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    debug!("Starting with {:?}", settings);

    let mut console = TerminalConsole::new(settings.echo_input);
    let game = Game::new(settings)?;
    let outcome = game.play(&mut console)?;

    // Exit status is the same whether or not the case was solved
    info!(
        "Game over: accused '{}', accepted={}",
        outcome.verdict.accused, outcome.verdict.accepted
    );
    Ok(())
}
