use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use imgtools::cli::{CliArgs, Command, SpriteSheetArgs};
use imgtools::config::{
    CropOptions, DEFAULT_NAME, Dimensions, DrawOptions, Grid, LoadedConfig, Offset, ResizeOptions,
    SplitOptions, pair,
};
use imgtools::error::ImgtoolsError;
use imgtools::input::resolve_inputs;
use imgtools::ops::{crop_images, draw_box, resize_images, split_sheet, stat};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Command::Stat(args) => stat::run(&args.input, args.json)?,
        Command::Crop(args) => {
            let size = Dimensions::from(pair(&args.size, "size")?);
            let offset = args
                .offset
                .as_deref()
                .map(|values| pair(values, "offset").map(Offset::from))
                .transpose()?
                .unwrap_or_default();
            let options = CropOptions::new(size)
                .offset(offset)
                .name(args.name.unwrap_or_else(|| DEFAULT_NAME.to_string()));
            options.validate()?;

            let inputs = resolve_inputs(&args.input)?;
            crop_images(&inputs, &args.output, &options, args.png.compress)?;
        }
        Command::Resize(args) => {
            let size = Dimensions::from(pair(&args.size, "size")?);
            let options = ResizeOptions::new(size)
                .mode(args.mode)
                .name(args.name.unwrap_or_else(|| DEFAULT_NAME.to_string()));
            options.validate()?;

            let inputs = resolve_inputs(&args.input)?;
            resize_images(&inputs, &args.output, &options, args.png.compress)?;
        }
        Command::Draw(args) => {
            let size = Dimensions::from(pair(&args.size, "size")?);
            let options = DrawOptions::new(size, &args.color)?
                .alpha(args.alpha)
                .name(args.name);

            let path = draw_box(&args.output, &options, args.png.compress)?;
            info!("Saved {}", path.display());
        }
        Command::SpriteSheet(args) => {
            let job = merge_config_with_args(&args)?;
            split_sheet(&job.input, &job.output, &job.options, args.png.compress)?;
        }
    }

    Ok(())
}

/// Everything `sprite-sheet` needs after merging config file and CLI args.
#[derive(Debug)]
struct SheetJob {
    input: PathBuf,
    output: PathBuf,
    options: SplitOptions,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &SpriteSheetArgs) -> Result<SheetJob> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };
    let config = loaded_config.as_ref().map(|lc| &lc.config);

    let input = args
        .input
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_input))
        .ok_or_else(|| missing("input"))?;

    let output = args
        .output
        .clone()
        .or_else(|| {
            loaded_config
                .as_ref()
                .and_then(LoadedConfig::resolve_output_dir)
        })
        .ok_or_else(|| missing("output"))?;

    // Pair-valued options: CLI > config
    let cli_pair = |values: &Option<Vec<u32>>, what: &str| -> Result<Option<[u32; 2]>> {
        Ok(values.as_deref().map(|v| pair(v, what)).transpose()?)
    };

    let parts = cli_pair(&args.parts, "parts")?
        .or_else(|| config.and_then(|c| c.parts))
        .ok_or_else(|| missing("parts"))?;

    let size = cli_pair(&args.size, "size")?
        .or_else(|| config.and_then(|c| c.size))
        .ok_or_else(|| missing("size"))?;

    let crop = cli_pair(&args.crop, "crop")?.or_else(|| config.and_then(|c| c.crop));

    let crop_offset = cli_pair(&args.crop_offset, "crop-offset")?
        .or_else(|| config.and_then(|c| c.crop_offset))
        .map(Offset::from)
        .unwrap_or_default();

    let name = args
        .name
        .clone()
        .or_else(|| config.and_then(|c| c.name.clone()))
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    // Boolean flag: CLI presence sets it to true, otherwise use config
    let skip_empty = args.skip_empty || config.is_some_and(|c| c.skip_empty);

    let options = SplitOptions::new(Grid::from(parts), Dimensions::from(size))
        .crop(crop.map(Dimensions::from))
        .crop_offset(crop_offset)
        .skip_empty(skip_empty)
        .name(name);
    options.validate()?;

    Ok(SheetJob {
        input,
        output,
        options,
    })
}

fn missing(what: &str) -> ImgtoolsError {
    ImgtoolsError::InvalidArgument(format!(
        "--{what} is required when the config file does not provide it"
    ))
}
