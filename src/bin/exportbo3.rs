//! Export a region of an MCEdit `.schematic` as a BO3 object.
//!
//! Usage:
//!   cargo run --release --bin exportbo3 -- --world house.schematic --center 4,0,4 house tileentities

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bo3_tools::{
    format_json_structure, format_structure, schematic, BlockPosition, Config, ExportCommand, ExportError,
    PlayerSession, Selection, success_message,
};

#[derive(Parser, Debug)]
#[command(name = "exportbo3", about = "Export a schematic region as a BO3 object")]
struct Args {
    /// The `.schematic` file to read blocks from.
    #[arg(long)]
    world: PathBuf,

    /// One corner of the selection (x,y,z). Defaults to the whole schematic.
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    min: Option<BlockPosition>,

    /// The opposite corner of the selection (x,y,z).
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    max: Option<BlockPosition>,

    /// The block that becomes 0,0,0 in the object.
    #[arg(long, allow_hyphen_values = true)]
    center: Option<BlockPosition>,

    /// Add a block check at this position. Repeatable.
    #[arg(long = "check", allow_hyphen_values = true)]
    checks: Vec<BlockPosition>,

    #[arg(long)]
    author: Option<String>,

    /// Folder the BO3 is written to (overrides the config file).
    #[arg(long)]
    structures_dir: Option<PathBuf>,

    /// JSON config file.
    #[arg(long, default_value = "exportbo3.json")]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Object name.
    name: String,

    /// includeair, tileentities, noleavesfix
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    flags: Vec<String>,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

fn run(args: Args, config: Config) -> Result<String, ExportError> {
    let bytes = fs::read(&args.world).map_err(|source| ExportError::Io { path: args.world.clone(), source })?;
    let world_name = args
        .world
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "world".to_string());
    let world = schematic::from_schematic(&world_name, &bytes)?;
    info!(
        "Loaded {} ({} blocks, {} tile entities)",
        args.world.display(),
        world.count_non_air(),
        world.tile_entity_count()
    );

    let bounds = world.get_bounding_box();
    let (min, max) = match (args.min, args.max) {
        (Some(min), Some(max)) => (min, max),
        _ => (bounds.min, bounds.max),
    };

    let mut session = PlayerSession::new(args.author.unwrap_or(config.default_author));
    session.select(Selection::new(world.name.clone(), min, max));
    if let Some(center) = args.center {
        session.mark_center(center);
    }
    for check in args.checks {
        session.add_block_check(check);
    }

    let command = ExportCommand {
        structures_dir: args.structures_dir.unwrap_or(config.structures_dir),
        description: Some(config.description),
    };
    let mut command_args = vec![args.name];
    command_args.extend(args.flags);
    let document = command.execute(&session, command_args.as_slice(), &world)?;

    if args.json {
        Ok(format_json_structure(&document)?)
    } else {
        Ok(format!("{}\n{}", success_message(&document), format_structure(&document)))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = Config::load(&args.config);
    let level = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_precondition() => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("Failed to create BO3: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_flags_after_name() {
        let args = Args::try_parse_from([
            "exportbo3", "--world", "w.schematic", "--center", "-4,0,2", "house", "--includeair", "tileentities",
        ])
        .unwrap();

        assert_eq!(args.name, "house");
        assert_eq!(args.center, Some(BlockPosition::new(-4, 0, 2)));
        assert_eq!(args.flags, vec!["--includeair", "tileentities"]);
    }
}
