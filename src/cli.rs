//! Headless map commands.
//!
//! Usage examples:
//!   tilemap-editor info town.cmp
//!   tilemap-editor convert town.map town.cmp
//!   tilemap-editor new blank.map --width 100 --height 80
//!   tilemap-editor render town.cmp town.png --size 16 --no-objects
//!   tilemap-editor fill town.cmp --x 4 --y 9 --tile 17 --radius 10
//!   tilemap-editor -vv --log --no-config info town.cmp

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use thiserror::Error;
use tracing::{error, info, warn};

use tilemap_editor::config::AppConfig;
use tilemap_editor::editor::{Clipboard, MapEditor};
use tilemap_editor::map::{
    load_map, save_map, DisplayMode, FormatError, Layer, Map, SwatchArtProvider, TilePos,
};

/// Tile map editor: inspect, convert, create and render `.map` / `.cmp` files.
#[derive(Parser, Debug)]
#[command(name = "tilemap-editor", version, about)]
pub struct CliArgs {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also log to the default log file under the platform state directory
    #[arg(long, global = true)]
    pub log: bool,

    /// Also log to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Run with default settings and save nothing
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print dimensions and layer statistics of a map
    Info {
        map: PathBuf,
    },
    /// Re-encode a map; formats follow the file extensions (.cmp compressed, else raw)
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
    /// Create an empty map
    New {
        output: PathBuf,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Render a map to PNG with flat placeholder colours
    Render {
        map: PathBuf,
        output: PathBuf,
        /// Cell edge length in pixels (defaults to the configured size)
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        no_tiles: bool,
        #[arg(long)]
        no_objects: bool,
    },
    /// Flood fill the region under a cell with one visual id and save the map
    Fill {
        map: PathBuf,
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
        /// Visual id to fill with
        #[arg(long)]
        tile: u16,
        /// Cells on each side of the start cell the fill may reach (defaults to the configured radius)
        #[arg(long)]
        radius: Option<u32>,
        /// Write the result here instead of over the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error("a {width} x {height} map at {size} px per cell is too large to render")]
    CanvasTooLarge { width: u32, height: u32, size: u32 },
    #[error("cell ({x}, {y}) is outside the {width} x {height} map")]
    OutsideMap { x: u32, y: u32, width: u32, height: u32 },
}

/// Run one command and return an OS exit code.
pub fn run(args: CliArgs, config: &mut AppConfig) -> ExitCode {
    let result = match args.command {
        Command::Info { map } => info_command(&map, config),
        Command::Convert { input, output } => convert_command(&input, &output, config),
        Command::New {
            output,
            width,
            height,
        } => new_command(&output, width, height, config),
        Command::Render {
            map,
            output,
            size,
            no_tiles,
            no_objects,
        } => {
            let size = size.unwrap_or(config.data.tile_pixel_size);
            let saved = config.data.display_mode();
            let mode = DisplayMode::new(
                saved.show_tiles && !no_tiles,
                saved.show_objects && !no_objects,
            );
            render_command(&map, &output, size, mode, config)
        }
        Command::Fill {
            map,
            x,
            y,
            tile,
            radius,
            output,
        } => {
            let output = output.unwrap_or_else(|| map.clone());
            fill_command(&map, &output, TilePos::new(x, y), tile, radius, config)
        }
    };

    if let Err(e) = config.save_if_dirty() {
        warn!("Failed to save config: {}", e);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn open(path: &Path, config: &mut AppConfig) -> Result<Map, CliError> {
    let map = load_map(path)?;
    config.push_recent_map(path);
    Ok(map)
}

fn info_command(path: &Path, config: &mut AppConfig) -> Result<(), CliError> {
    let map = open(path, config)?;

    let mut visuals = BTreeSet::new();
    let mut impassable = 0usize;
    let mut objects = 0usize;
    for (_, tile) in map.tiles() {
        visuals.insert(tile.visual_id);
        if !tile.passable {
            impassable += 1;
        }
        if tile.object_id != 0 {
            objects += 1;
        }
    }

    println!("name:        {}", map.name);
    println!("size:        {} x {}", map.width(), map.height());
    println!("cells:       {}", u64::from(map.width()) * u64::from(map.height()));
    println!("visual ids:  {}", visuals.len());
    println!("impassable:  {}", impassable);
    println!("objects:     {}", objects);
    Ok(())
}

fn convert_command(input: &Path, output: &Path, config: &mut AppConfig) -> Result<(), CliError> {
    let mut map = open(input, config)?;
    save_map(&mut map, output)?;
    info!("Converted {:?} to {:?}", input, output);
    Ok(())
}

fn new_command(output: &Path, width: u32, height: u32, config: &mut AppConfig) -> Result<(), CliError> {
    let mut map = Map::new(width, height);
    save_map(&mut map, output)?;
    config.push_recent_map(output);
    info!("Created {} x {} map at {:?}", width, height, output);
    Ok(())
}

fn render_command(
    path: &Path,
    output: &Path,
    size: u32,
    mode: DisplayMode,
    config: &mut AppConfig,
) -> Result<(), CliError> {
    if size == 0 {
        return Err(CliError::ZeroCellSize);
    }
    let mut map = open(path, config)?;
    if map.canvas_size(size).is_none() {
        return Err(CliError::CanvasTooLarge {
            width: map.width(),
            height: map.height(),
            size,
        });
    }
    let art = SwatchArtProvider::new(size);
    let image = map.render_full(size, mode, &art);
    image.save(output)?;
    info!(
        width = image.width(),
        height = image.height(),
        "Rendered {:?} to {:?}",
        path,
        output
    );
    Ok(())
}

fn fill_command(
    path: &Path,
    output: &Path,
    start: TilePos,
    visual_id: u16,
    radius: Option<u32>,
    config: &mut AppConfig,
) -> Result<(), CliError> {
    let map = open(path, config)?;
    if !map.contains(start) {
        return Err(CliError::OutsideMap {
            x: start.x,
            y: start.y,
            width: map.width(),
            height: map.height(),
        });
    }

    let mut editor = MapEditor::with_settings(map, &config.data);
    if let Some(radius) = radius {
        editor.fill_radius = radius;
    }
    editor.map.set_editable(true);
    editor.clipboard = Clipboard::single(Layer::Tile, visual_id);

    let filled = editor.flood_fill_at(start);
    editor.save_file(output)?;
    println!("filled {} cells", filled.len());
    info!(
        cells = filled.len(),
        radius = editor.fill_radius,
        "Filled {:?} from ({}, {})",
        output,
        start.x,
        start.y
    );
    Ok(())
}
