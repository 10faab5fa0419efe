use std::path::PathBuf;

use anyhow::Result;
use cart::FileSlot;
use clap::{Parser, Subcommand};
use tracing::info;
use widget::{Config, Outcome, PrintLauncher, Widget, describe, init_tracing, routes};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List items, optionally narrowed by category and search text
    Browse {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },
    /// Add the item card with this name
    Add { name: String },
    Remove { id: String },
    Inc { id: String },
    Dec { id: String },
    Clear,
    Cart,
    /// Send the order to the store
    Checkout {
        #[arg(long)]
        location: String,
    },
}

impl Command {
    fn actions(self) -> Vec<(&'static str, String)> {
        match self {
            Command::Browse { category, search } => vec![
                ("filter", category.unwrap_or_default()),
                ("search", search.unwrap_or_default()),
            ],
            Command::Add { name } => vec![("add", name)],
            Command::Remove { id } => vec![("remove", id)],
            Command::Inc { id } => vec![("inc", id)],
            Command::Dec { id } => vec![("dec", id)],
            Command::Clear => vec![("clear", String::new())],
            Command::Cart => vec![("open", String::new())],
            Command::Checkout { location } => {
                vec![("location", location), ("checkout", String::new())]
            }
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::load()?;
    let catalog = catalog::load_catalog(&args.catalog)?;

    let slot = FileSlot::new(&config.storage_dir);
    let mut widget = Widget::new(&config, catalog, slot, Box::new(PrintLauncher));
    let router = routes();

    let mut last = Outcome::Ignored;
    for (action, target) in args.command.actions() {
        info!("Dispatching {action}");
        last = router.dispatch(&mut widget, action, &target);
    }

    let text = match last {
        Outcome::Panel(_) => widget.view().to_string(),
        // the launcher already printed the link
        Outcome::Opened(_) => String::new(),
        ref outcome => describe(outcome, &widget),
    };

    if !text.is_empty() {
        println!("{text}");
    }

    Ok(())
}
