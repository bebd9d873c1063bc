//! Image to BLP conversion commands

use crate::utils::{batch_progress, format_bytes};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use image::{DynamicImage, ImageReader, imageops::FilterType};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use wow_blp_plain::{Compression, save_blp};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input image (any format supported by the `image` crate)
    pub input: PathBuf,

    /// Output BLP file, defaults to the input path with a `.blp` extension
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Glob patterns of the input images
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Directory receiving the BLP files
    #[arg(short, long)]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Args, Clone, Copy)]
pub struct EncodingArgs {
    /// BLP compression to use
    #[arg(long, default_value = "plain")]
    pub compression: CompressionCli,

    /// Resize to the nearest power of two dimensions with this filter
    #[arg(long)]
    pub resize: Option<ResizeFilter>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompressionCli {
    /// Uncompressed BGRA
    Plain,
    /// Palette indices (not supported yet)
    Palettized,
    /// S3TC blocks (not supported yet)
    Dxt,
}

impl From<CompressionCli> for Compression {
    fn from(value: CompressionCli) -> Self {
        match value {
            CompressionCli::Plain => Compression::Plain,
            CompressionCli::Palettized => Compression::Palettized,
            CompressionCli::Dxt => Compression::Dxt,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResizeFilter {
    /// Nearest Neighbor
    Nearest,
    /// Linear Filter
    Triangle,
    /// Cubic Filter
    CatmullRom,
    /// Gaussian Filter
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> FilterType {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

pub fn convert(args: ConvertArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("blp"));

    let size = convert_file(&args.input, &output, args.encoding)?;

    println!(
        "✓ Converted {} to {} ({})",
        args.input.display(),
        output.display(),
        format_bytes(size)
    );
    Ok(())
}

pub fn batch(args: BatchArgs) -> Result<()> {
    let mut inputs = Vec::new();
    let mut matched = HashSet::new();
    for pattern in &args.patterns {
        let paths =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for entry in paths {
            let path = entry.context("Failed to read matched path")?;
            if matched.insert(path.clone()) {
                inputs.push(path);
            }
        }
    }
    if inputs.is_empty() {
        anyhow::bail!("No input files matched {:?}", args.patterns);
    }

    std::fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.out_dir.display()
        )
    })?;

    let pb = batch_progress(inputs.len());
    let mut failures = 0;
    let mut total_size = 0;
    let mut written = HashSet::new();

    for input in &inputs {
        let output = output_path(&args.out_dir, input);
        pb.set_message(input.display().to_string());

        // Inputs sharing a file stem map to the same output
        if written.contains(&output) {
            failures += 1;
            pb.suspend(|| {
                log::error!(
                    "{}: skipped, {} was already written from another input",
                    input.display(),
                    output.display()
                )
            });
            pb.inc(1);
            continue;
        }

        match convert_file(input, &output, args.encoding) {
            Ok(size) => {
                total_size += size;
                written.insert(output);
            }
            Err(e) => {
                failures += 1;
                pb.suspend(|| log::error!("{}: {e:#}", input.display()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "✓ Converted {} of {} files into {} ({})",
        inputs.len() - failures,
        inputs.len(),
        args.out_dir.display(),
        format_bytes(total_size)
    );

    if failures > 0 {
        anyhow::bail!("{failures} file(s) failed to convert");
    }
    Ok(())
}

/// Decode, optionally resize and encode one image. Returns the written size.
fn convert_file(input: &Path, output: &Path, encoding: EncodingArgs) -> Result<u64> {
    log::info!("Converting {} to {}", input.display(), output.display());

    let image = ImageReader::open(input)
        .with_context(|| format!("Failed to open image file: {}", input.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image: {}", input.display()))?;

    let image = match encoding.resize {
        Some(filter) => fit_power_of_two(image, filter),
        None => image,
    };

    save_blp(&image, encoding.compression.into(), output)
        .with_context(|| format!("Failed to save BLP file: {}", output.display()))?;

    let size = std::fs::metadata(output)
        .with_context(|| format!("Failed to stat BLP file: {}", output.display()))?
        .len();
    Ok(size)
}

fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("texture"));
    name.push(".blp");
    out_dir.join(name)
}

fn fit_power_of_two(image: DynamicImage, filter: ResizeFilter) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let target = (nearest_power_of_two(width), nearest_power_of_two(height));
    if target == (width, height) {
        return image;
    }

    log::info!(
        "Resizing {width}x{height} to {}x{} with {filter:?} filter",
        target.0,
        target.1
    );
    image.resize_exact(target.0, target.1, filter.into())
}

/// Closest power of two, ties are rounded up
fn nearest_power_of_two(value: u32) -> u32 {
    if value.is_power_of_two() {
        return value;
    }
    if value == 0 {
        return 1;
    }
    let Some(upper) = value.checked_next_power_of_two() else {
        return 1 << 31;
    };
    let lower = upper >> 1;
    if value - lower < upper - value {
        lower
    } else {
        upper
    }
}
