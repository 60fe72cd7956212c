//! Console player for **yath** games described as JSON markup.
use std::cell::RefCell;

use std::{error::Error, fs, io, io::Write, path::Path, rc::Rc};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use rand::Rng;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use yath::{
    click_event::ClickEvent,
    game::{
        callbacks::{ClickCallback, ClickResponse},
        screen_change::Transition,
        Game, GameConfig,
    },
    game_error::GameError,
    markup::NodeId,
};

const MAX_AUTO_PLAY_CLICKS: usize = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The JSON markup file
    pub markup_filename: String,

    /// Screen to start on (defaults to the first screen)
    #[arg(short, long)]
    pub start_screen: Option<String>,

    /// Click options randomly
    #[arg(short, default_value_t = false)]
    pub auto_play: bool,

    /// Log discovery, bindings and transitions to stderr
    #[arg(short, default_value_t = false)]
    pub verbose: bool,
}

enum Command {
    Click(usize),
    GoTo(String),
    Visits(String),
    Inventory(),
    Exit(),
    Help(),
}

/// Adds (or removes) the item named by the clicked node's `data-item`
/// attribute, `data-count` times.
struct ItemCallback {
    take: bool,
}

impl ItemCallback {
    pub fn new(take: bool) -> Rc<RefCell<ItemCallback>> {
        Rc::new(RefCell::new(ItemCallback { take }))
    }
}

impl ClickCallback for ItemCallback {
    fn on_click(&mut self, game: &mut Game, event: &mut ClickEvent) -> ClickResponse {
        let doc = game.document();
        let target = event.get_target();

        let item = match doc.get_attribute(target, "data-item") {
            Some(item) => item.to_string(),
            None => return ClickResponse::PassThrough,
        };

        let count = doc
            .get_attribute(target, "data-count")
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(1);

        let total = if self.take {
            game.inventory_mut().add_items(&item, count)
        } else {
            game.inventory_mut().remove_items(&item, count)
        };

        println!("<{item}: {total}>");

        ClickResponse::Suppress
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logger(args.verbose);

    let markup = get_markup_string(&args.markup_filename)?;

    let config = GameConfig::new()
        .with_click_callback("take", ItemCallback::new(true))
        .with_click_callback("drop", ItemCallback::new(false));

    let mut game = Game::from_json(&markup, config)?;

    let start = match args.start_screen {
        Some(start) => start,
        None => match game.get_screen_names().first() {
            Some(first) => first.to_string(),
            None => {
                print_error("the markup declares no screen");
                return Ok(());
            }
        },
    };

    game.go_to_screen(&start)?;

    let mut clicks = 0;
    let mut end = false;

    while !end {
        let options = print_screen(&game)?;

        let command = if args.auto_play {
            if options.is_empty() || clicks >= MAX_AUTO_PLAY_CLICKS {
                break;
            }

            let i = rand::thread_rng().gen_range(0..options.len());
            println!("?> {}", i + 1);
            clicks += 1;

            Command::Click(i)
        } else {
            match read_input(&options)? {
                Some(command) => command,
                None => break,
            }
        };

        end = process_command(command, &mut game, &options)?;
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();

    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        print_error(&format!("logging disabled: {e}"));
    }
}

// Returns true if the program has to stop
fn process_command(command: Command, game: &mut Game, options: &[NodeId]) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Click(i) => match game.click(options[i]) {
            Ok(event) => {
                if !event.is_default_prevented() {
                    println!("<nothing happens>");
                }
            }
            Err(ref desc @ GameError::UnknownScreen(ref screen)) => {
                println!("<error going to '{screen}': {desc}>")
            }
            Err(e) => return Err(e.into()),
        },
        Command::GoTo(screen) => match game.go_to_screen(&screen) {
            Ok(Transition::Proceed) => {}
            Ok(Transition::Abort) => println!("<transition to '{screen}' aborted>"),
            Err(desc) => println!("<error going to '{screen}': {desc}>"),
        },
        Command::Visits(screen) => match game.get_screen_visits(&screen) {
            Some(visits) => println!("{screen}: {visits} visit(s)"),
            None => println!("<unknown screen '{screen}'>"),
        },
        Command::Inventory() => {
            let items = game.inventory().get_all_items();

            if items.is_empty() {
                println!("<inventory is empty>");
            }

            for item in items {
                println!("{}: {}", item.name, item.total);
            }
        }
        Command::Exit() => return Ok(true),
        Command::Help() => println!(
            "Commands:\n\t<n>\n\tgo <screen>\n\tvisits <screen>\n\tinv\n\tquit\n\t"
        ),
    }

    Ok(false)
}

/// Prints the visible screen and returns its clickable nodes, numbered from 1.
fn print_screen(game: &Game) -> Result<Vec<NodeId>, Box<dyn Error>> {
    let screen = match game.get_current_screen() {
        Some(screen) => screen,
        None => return Ok(Vec::new()),
    };

    let doc = game.document();
    let node = screen.get_node();

    println!();
    println!("== {} ==", screen.get_name());

    if let Some(text) = doc.get_text(node) {
        println!("{text}");
    }

    let mut options = Vec::new();

    for d in doc.descendants(node)? {
        if game.is_clickable(d) {
            options.push(d);
            println!("{}. {}", options.len(), doc.text_content(d)?);
        } else if let Some(text) = doc.get_text(d) {
            if !options.iter().any(|o| doc.ancestors_inclusive(d).map(|a| a.contains(o)).unwrap_or(false)) {
                println!("{text}");
            }
        }
    }

    if game.is_clickable(node) {
        options.push(node);
        println!("{}. {}", options.len(), screen.get_name());
    }

    Ok(options)
}

// Returns None when the input is closed
fn read_input(options: &[NodeId]) -> Result<Option<Command>, Box<dyn Error>> {
    let mut line = String::new();

    loop {
        print!("?> ");
        io::stdout().flush()?;

        line.clear();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Ok(v) = trimmed.parse::<usize>() {
            if v < 1 || v > options.len() {
                print_error("option out of range");
                continue;
            }

            return Ok(Some(Command::Click(v - 1)));
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();

        match words[0].trim().to_lowercase().as_str() {
            "exit" | "quit" => return Ok(Some(Command::Exit())),
            "help" => return Ok(Some(Command::Help())),
            "inv" | "inventory" => return Ok(Some(Command::Inventory())),
            "go" => {
                if words.len() == 2 {
                    return Ok(Some(Command::GoTo(words[1].trim().to_string())));
                }

                print_error("incorrect screen name");
            }
            "visits" => {
                if words.len() == 2 {
                    return Ok(Some(Command::Visits(words[1].trim().to_string())));
                }

                print_error("incorrect screen name");
            }
            _ => print_error("unrecognized option or command"),
        }
    }
}

fn print_error(error: &str) {
    eprintln!("<{error}>");
}

fn get_markup_string(filename: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(filename);
    let markup = fs::read_to_string(path)
        .with_context(|| format!("could not read file `{}`", path.to_string_lossy()))?;

    Ok(markup)
}
