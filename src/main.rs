//! bizcard entrypoint

use bizcard::output::{Artifacts, RunSummary};
use bizcard::{CardConfig, CardRenderer, Result, logging};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "bizcard",
    version,
    about = "Printable business card generator with a QR-encoded vCard back face"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to bizcard.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the artifact output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Override the color theme (`light`, `dark`, or `bitcoin`)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Override the canvas width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Override the canvas height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Override the output image format (file extension, e.g. png)
    #[arg(long, value_name = "EXT")]
    format: Option<String>,

    /// Override the font file path, relative to the font directory
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Open the finished faces in the configured viewer
    #[arg(long)]
    open: bool,

    /// Output the run summary as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CardConfig::load(cli.config.as_deref())?;

    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    if let Some(theme) = cli.theme {
        config.render.theme = Some(theme);
    }

    if let Some(width) = cli.width {
        config.render.width = Some(width);
    }

    if let Some(height) = cli.height {
        config.render.height = Some(height);
    }

    if let Some(format) = cli.format {
        config.render.format = Some(format);
    }

    if let Some(font) = cli.font {
        config.render.font = Some(font);
    }

    logging::init(&config.logging)?;

    let params = config.resolve()?;
    info!(
        theme = %params.render.theme,
        width = params.render.width,
        height = params.render.height,
        "Rendering business card"
    );

    let renderer = CardRenderer::new(params)?;
    let artifacts = Artifacts::new(&config.output, &renderer.params().render);
    artifacts.create_dir()?;

    // Shared blank intermediate; persisted like the faces, overwritten each run.
    artifacts.save_image(&renderer.blank(), &artifacts.blank_path())?;

    let front = renderer.front()?;
    artifacts.save_image(&front, &artifacts.front_path())?;

    let record = renderer.vcard();
    artifacts.save_vcard(&record)?;

    let qr = renderer.qr(&record)?;
    artifacts.save_image(&qr, &artifacts.qr_path())?;

    let back = renderer.back(&qr);
    artifacts.save_image(&back, &artifacts.back_path())?;

    if cli.open {
        artifacts.open_viewer(&config.output.viewer);
    }

    let summary = RunSummary::new(&renderer.params().render, &artifacts);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in summary.human() {
            println!("{line}");
        }
    }

    Ok(())
}
