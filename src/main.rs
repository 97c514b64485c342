use clap::{Parser, Subcommand, ValueEnum};
use outfit_builder::commands::*;
use outfit_builder::core::{
    error::{OutfitError, Result},
    print_error, print_hint,
    session::Direction,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "outfit-builder")]
#[command(about = "Build outfits by swiping through clothing, one category at a time")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Keep config, saved outfits and session under this directory
    #[arg(long, global = true, value_name = "DIR")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current category and the item up for a decision
    Browse,
    /// Keep the current item and move to the next category
    Like,
    /// Skip the current item; it goes to the back of the queue
    Dislike,
    /// Show the outfit with every slot and the total price
    Outfit,
    /// Empty one outfit slot
    Remove {
        /// Category to clear (accessories, tops, bottoms, shoes)
        category: String,
    },
    /// Jump to a category by name or number (1-4)
    Goto {
        /// Category name or position
        target: String,
    },
    /// Only show items for a gender (women, men, any)
    Gender {
        /// Gender to show items for
        gender: String,
    },
    /// Start a new outfit from the first category
    Reset,
    /// Save the current outfit under a name
    Save {
        /// Name for the outfit
        name: String,
    },
    /// List saved outfits
    Saved,
    /// Replace the current outfit with a saved one
    Load {
        /// Saved outfit number (see 'saved')
        position: String,
    },
    /// Delete saved outfits by number (e.g. "1 3-4")
    Delete {
        /// Saved outfit numbers
        positions: Vec<String>,
    },
    /// List catalog items
    Catalog {
        /// Only show this category
        category: Option<String>,
    },
    /// Show or change configuration
    Config {
        /// Turn gender scoping on or off
        #[arg(long, value_enum)]
        gender_scoping: Option<Toggle>,
        /// Load items from this JSON catalog file
        #[arg(long, value_name = "PATH", conflicts_with = "builtin_catalog")]
        catalog: Option<PathBuf>,
        /// Go back to the built-in catalog
        #[arg(long)]
        builtin_catalog: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    let home = cli.home.as_deref();

    match cli.command {
        Commands::Browse => execute_browse(home),
        Commands::Like => execute_swipe(home, Direction::Accept),
        Commands::Dislike => execute_swipe(home, Direction::Reject),
        Commands::Outfit => execute_outfit(home),
        Commands::Remove { category } => execute_remove(home, &category),
        Commands::Goto { target } => execute_goto(home, &target),
        Commands::Gender { gender } => execute_gender(home, &gender),
        Commands::Reset => execute_reset(home),
        Commands::Save { name } => execute_save(home, &name),
        Commands::Saved => execute_saved(home),
        Commands::Load { position } => execute_load(home, &position),
        Commands::Delete { positions } => {
            if positions.is_empty() {
                return Err(OutfitError::invalid_position(""));
            }
            execute_delete(home, positions)
        }
        Commands::Catalog { category } => execute_catalog(home, category.as_deref()),
        Commands::Config {
            gender_scoping,
            catalog,
            builtin_catalog,
        } => {
            let catalog = if builtin_catalog {
                Some(CatalogSource::Builtin)
            } else {
                catalog.map(CatalogSource::File)
            };
            execute_config(
                home,
                gender_scoping.map(|toggle| matches!(toggle, Toggle::On)),
                catalog,
            )
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        if let OutfitError::CatalogReadFailed { .. } | OutfitError::CatalogParseFailed { .. } = e {
            print_hint("Run 'outfit-builder config --builtin-catalog' or point --catalog at a valid file");
        }
        // Bad input exits 1, storage and environment problems exit 2
        std::process::exit(if e.is_user_error() { 1 } else { 2 });
    }
}
