use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use wander::world::Direction;
use wander::{Session, load_world_from_file};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let world_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("worlds/basic.toml"));

    let world = match load_world_from_file(&world_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", world_path.display());
            std::process::exit(1);
        }
    };

    println!("Welcome to {}!", world.name);
    if !world.desc.is_empty() {
        println!("{}", world.desc);
    }
    println!();
    println!("Rooms:");
    print!("{}", world.rooms_display());
    println!();

    let stdin = io::stdin();

    print!("What is your name? ");
    io::stdout().flush()?;
    let mut name = String::new();
    if stdin.read_line(&mut name)? == 0 {
        return Ok(());
    }
    let name = name.trim();
    let name = if name.is_empty() { "Stranger" } else { name };

    let start = match world
        .start_room()
        .or_else(|| world.rooms_in_order().next().map(|r| r.id.as_str()))
    {
        Some(id) => id.to_string(),
        None => {
            eprintln!("World '{}' has no rooms to start in.", world.name);
            std::process::exit(1);
        }
    };

    let mut session = match Session::new(world, name, &start) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Could not start the session: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!(
        "Good luck, {}. Type 'look' to look around, 'quit' to exit.",
        session.player().name()
    );
    println!();
    print_look(&session);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            println!("\nGoodbye.");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let lower = input.to_lowercase();
        let mut parts = lower.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let rest = parts.collect::<Vec<&str>>().join(" ");

        match verb {
            "quit" | "exit" => {
                println!("Goodbye.");
                break;
            }
            "look" | "l" => print_look(&session),
            "rooms" => print!("{}", session.world().rooms_display()),
            "inventory" | "i" => println!("{}", session.player().inventory_display()),
            "go" => {
                if rest.is_empty() {
                    println!("Go where?");
                } else {
                    walk_and_look(&mut session, &rest);
                }
            }
            "take" | "get" => {
                if rest.is_empty() {
                    println!("Take what?");
                } else if let Err(e) = session.take_item(&rest) {
                    println!("{e}");
                } else {
                    println!("Taken.");
                }
            }
            "drop" => {
                if rest.is_empty() {
                    println!("Drop what?");
                } else if let Err(e) = session.drop_item(&rest) {
                    println!("{e}");
                } else {
                    println!("Dropped.");
                }
            }
            "eat" => {
                if rest.is_empty() {
                    println!("Eat what?");
                } else {
                    match session.eat_item(&rest) {
                        Ok(effect) => println!("{effect}"),
                        Err(e) => println!("{e}"),
                    }
                }
            }
            _ if Direction::parse(&lower).is_some() => walk_and_look(&mut session, &lower),
            _ => println!("I don't understand that command."),
        }
    }

    Ok(())
}

fn walk_and_look(session: &mut Session, token: &str) {
    match session.walk(token) {
        Ok(_) => {
            if let Some(direction) = Direction::parse(token) {
                println!("You go {direction}.");
            }
            print_look(session);
        }
        Err(e) => println!("{e}"),
    }
}

fn print_look(session: &Session) {
    match session.look() {
        Ok(s) => println!("{s}"),
        Err(e) => println!("{e}"),
    }
}
