//! Saved palette library mode

use clap::Subcommand;
use luxwheel::store::{Direction, JsonFileStore, PaletteRepository};

use super::{Context, PathArgs, build_palette};
use crate::output::{print_error, print_saved};

#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// List saved palettes
    List,
    /// Generate a palette and save it under NAME
    Save {
        name: String,
        #[command(flatten)]
        path: PathArgs,
    },
    /// Delete a saved palette
    Delete { id: String },
    /// Rename a saved palette
    Rename { id: String, name: String },
    /// Move a saved palette up or down the list
    Move {
        id: String,
        #[arg(value_enum)]
        direction: Direction,
    },
}

/// Run a library command against the JSON library file
pub fn run_library(ctx: &Context, command: &LibraryCommand) {
    let mut store = JsonFileStore::new(ctx.settings.library_path());

    let result = match command {
        LibraryCommand::List => store.load().map(|palettes| print_saved(&palettes)),
        LibraryCommand::Save { name, path } => {
            let (_, palette) = build_palette(path, &ctx.settings);
            store.save(name, &palette).map(|saved| {
                println!("Saved '{}' ({} colors) as {}", saved.name, saved.colors.len(), saved.id);
            })
        }
        LibraryCommand::Delete { id } => store.delete(id).map(|()| println!("Deleted {}", id)),
        LibraryCommand::Rename { id, name } => store
            .rename(id, name)
            .map(|()| println!("Renamed {} to '{}'", id, name)),
        LibraryCommand::Move { id, direction } => store.move_palette(id, *direction).and_then(|()| {
            if !ctx.quiet {
                store.load().map(|palettes| print_saved(&palettes))
            } else {
                Ok(())
            }
        }),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
