//! Village Rescue - terminal front end
//!
//! Reads one command per line and shows the quest state after each one.
//! All game logic lives in the library; this file only parses input and
//! prints what GameWorld reports.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use village_rescue::seed::SeedSource;
use village_rescue::{AdvanceOutcome, GameWorld, SeedLoader};

/// Command-line options
struct Options {
    seed_path: Option<PathBuf>,
    write_seed: bool,
}

impl Options {
    fn parse() -> Result<Self> {
        let mut options = Options {
            seed_path: None,
            write_seed: false,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let path = args.next().context("--seed needs a file path")?;
                    options.seed_path = Some(PathBuf::from(path));
                }
                "--write-seed" => options.write_seed = true,
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(options)
    }
}

/// Player commands
enum Command {
    Status,
    Advance,
    Pop,
    Use(String),
    SearchBag(String),
    SearchAll(String),
    Villages,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "status" | "s" => Some(Command::Status),
            "advance" | "a" => Some(Command::Advance),
            "pop" | "p" => Some(Command::Pop),
            "use" | "u" => Some(Command::Use(rest.to_string())),
            "search" => {
                let (scope, query) = rest.split_once(' ').unwrap_or((rest, ""));
                match scope {
                    "bag" => Some(Command::SearchBag(query.to_string())),
                    "all" => Some(Command::SearchAll(query.to_string())),
                    _ => None,
                }
            }
            "villages" | "v" => Some(Command::Villages),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  status            - Show current village, bag and progress");
    println!("  advance           - Rescue the current village");
    println!("  pop               - Remove the last item added to your bag");
    println!("  use <item>        - Use an item from your bag");
    println!("  search bag <item> - Look for an item in your bag");
    println!("  search all <item> - Look for an item in every village");
    println!("  villages          - List every village and its items");
    println!("  quit              - Leave the game");
}

fn print_status(world: &GameWorld) {
    println!("---");
    match world.active_village() {
        Some(village) => {
            println!("You are at: {}", village.name());
            println!("Items available here: {}", village.item_names().join(", "));
            let required = world.active_requirements();
            if !required.is_empty() {
                println!("Needed to rescue: {}", required.join(", "));
            }
        }
        None => println!("Current village: none. The quest is complete!"),
    }

    let remaining = world.remaining_village_names();
    if remaining.is_empty() {
        println!("Villages to rescue: none");
    } else {
        println!("Villages to rescue: {}", remaining.join(", "));
    }

    let saved = world.saved_village_names();
    if saved.is_empty() {
        println!("Rescued villages: none yet");
    } else {
        println!("Rescued villages: {}", saved.join(", "));
    }

    let contents = world.bag_view();
    if contents.is_empty() {
        println!("Bag: empty ({}/{})", world.bag_size(), world.bag_capacity());
    } else {
        println!(
            "Bag ({}/{}): {}",
            world.bag_size(),
            world.bag_capacity(),
            contents.join(", ")
        );
    }
}

fn print_villages(world: &GameWorld) {
    for village in world.all_villages() {
        let items: Vec<String> = village.items().iter().map(ToString::to_string).collect();
        println!("{}: {}", village.name(), items.join(", "));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "village_rescue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = Options::parse()?;
    let loader = SeedLoader::new();

    if options.write_seed {
        match loader.write_default()? {
            Some(path) => println!("Wrote default quest to {}", path.display()),
            None => println!("No config directory available on this platform"),
        }
        return Ok(());
    }

    let (seed, source) = loader.resolve(options.seed_path.as_deref())?;
    match &source {
        SeedSource::File(path) => tracing::info!("Using seed file {}", path.display()),
        SeedSource::BuiltIn => tracing::info!("Using built-in quest"),
    }

    let mut world = GameWorld::initialize(seed).context("Invalid quest seed")?;
    let mut seen = 0;

    println!("Village Rescue");
    print_help();
    print_status(&world);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            println!("Unknown command. Type 'help' for a list.");
            continue;
        };

        match command {
            Command::Status => print_status(&world),
            Command::Advance => {
                // Rescue and refusal messages are printed from the journal below
                if let Ok(AdvanceOutcome::QuestComplete) = world.advance() {
                    println!("Every village has already been saved.");
                }
            }
            Command::Pop => {
                world.bag_pop();
            }
            Command::Use(name) => {
                if name.is_empty() {
                    println!("Usage: use <item>");
                } else {
                    world.bag_use_item(&name);
                }
            }
            Command::SearchBag(query) => {
                world.search_bag(&query);
            }
            Command::SearchAll(query) => {
                world.search_all_villages(&query);
            }
            Command::Villages => print_villages(&world),
            Command::Help => print_help(),
            Command::Quit => break,
        }

        for entry in world.journal().entries_since(seen) {
            println!("{}", entry);
        }
        seen = world.journal().len();
    }

    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(Command::parse("advance"), Some(Command::Advance)));
        assert!(matches!(Command::parse("  p "), Some(Command::Pop)));
        assert!(matches!(Command::parse("use büyülü asa"), Some(Command::Use(n)) if n == "büyülü asa"));
        assert!(matches!(Command::parse("search bag Kalkan"), Some(Command::SearchBag(q)) if q == "Kalkan"));
        assert!(matches!(Command::parse("search all  ok"), Some(Command::SearchAll(q)) if q == " ok"));
        assert!(matches!(Command::parse("search bag"), Some(Command::SearchBag(q)) if q.is_empty()));
        assert!(Command::parse("search everywhere ok").is_none());
        assert!(Command::parse("dance").is_none());
    }
}
