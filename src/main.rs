// SPDX-License-Identifier: MIT
use std::path::PathBuf;
use std::process::{exit, Command};

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbaImage;
use ninepatch::{PatchError, PatchGrid, PatchSource};

/// Render a 9-patch image at a fixed size or around a content image.
#[derive(Parser, Debug)]
#[command(name = "ninepatch")]
#[command(about = "Render android-style 9-patch images at arbitrary sizes")]
struct Args {
    /// Path to the 9-patch source image
    source: Option<PathBuf>,

    /// Target size as WxH, e.g. 200x48
    #[arg(short, long)]
    size: Option<String>,

    /// Render around this content image instead of a fixed size
    #[arg(short, long, conflicts_with = "size")]
    content: Option<PathBuf>,

    /// Write the result here instead of opening a viewer
    #[arg(short, long)]
    output: Option<PathBuf>,
}

enum Request {
    Size(u32, u32),
    Content(PathBuf),
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let request = match (&args.size, &args.content) {
        (Some(size), None) => match parse_size(size) {
            Ok((w, h)) => Request::Size(w, h),
            Err(err) => {
                eprintln!("{err}");
                exit(2);
            }
        },
        (None, Some(path)) => Request::Content(path.clone()),
        _ => {
            eprintln!("You must specify exactly one of --size or --content");
            exit(2);
        }
    };

    let Some(source) = args.source else {
        eprintln!("You must specify the path to the 9-patch source image");
        exit(3);
    };

    if let Err(err) = run(source, request, args.output) {
        eprintln!("Error: {err:#}");
        exit(1);
    }
}

fn run(source: PathBuf, request: Request, output: Option<PathBuf>) -> Result<()> {
    let grid = PatchGrid::from_source(PatchSource::Path(source))?;

    let result = match request {
        Request::Size(width, height) => grid.render(width, height)?,
        Request::Content(path) => {
            let content = image::open(&path)
                .with_context(|| format!("failed to open content image {}", path.display()))?
                .into_rgba8();
            grid.render_around(&content)?
        }
    };

    match output {
        Some(path) => result
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => display(&result)?,
    }
    Ok(())
}

/// Parse a `<width>x<height>` size string (case-insensitive separator).
fn parse_size(input: &str) -> std::result::Result<(u32, u32), PatchError> {
    let invalid = || PatchError::InvalidSize {
        input: input.to_string(),
    };
    let (w, h) = input.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse().map_err(|_| invalid())?;
    let h = h.trim().parse().map_err(|_| invalid())?;
    Ok((w, h))
}

/// Save to a kept temporary PNG and hand it to the platform viewer.
fn display(image: &RgbaImage) -> Result<()> {
    let file = tempfile::Builder::new()
        .prefix("ninepatch-")
        .suffix(".png")
        .keep(true)
        .tempfile()
        .context("failed to create temporary file")?;
    let path = file.path().to_path_buf();
    image
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let status = if cfg!(target_os = "macos") {
        Command::new("open").arg(&path).status()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(&path).status()
    } else {
        Command::new("xdg-open").arg(&path).status()
    }
    .with_context(|| format!("failed to open a viewer for {}", path.display()))?;

    if !status.success() {
        println!("Rendered image written to {}", path.display());
    }
    Ok(())
}
