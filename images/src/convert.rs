//! Directory scan, resize and encode.
//!
//! For every `X.png` / `X.jpg` / `X.jpeg` in a directory this writes
//! `X-thumb.<ext>` and `X-full.<ext>` next to it. Images are only ever
//! shrunk; anything narrower than the target width keeps its size.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use tracing::{debug, error, info, warn};
use ui::gallery::{variant_file_name, SizeVariant};

use crate::error::ConvertError;

const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Lossy WebP at the variant's quality.
    #[default]
    Webp,
    Jpeg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub variant: SizeVariant,
    pub max_width: u32,
    pub quality: u8,
}

/// Everything one run needs to know besides the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub format: OutputFormat,
    pub thumb: VariantSpec,
    pub full: VariantSpec,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            format: OutputFormat::Webp,
            thumb: VariantSpec {
                variant: SizeVariant::Thumb,
                max_width: 900,
                quality: 70,
            },
            full: VariantSpec {
                variant: SizeVariant::Full,
                max_width: 1600,
                quality: 80,
            },
        }
    }
}

impl Plan {
    fn variants(&self) -> [VariantSpec; 2] {
        [self.thumb, self.full]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Originals only: raster extension, not already a generated variant.
pub fn is_source_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !SOURCE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
    {
        return false;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    !SizeVariant::ALL
        .iter()
        .any(|v| stem.ends_with(&format!("-{}", v.token())))
}

/// Non-recursive listing of originals in `dir`, sorted by file name.
pub fn find_sources(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = fs::read_dir(dir).map_err(|source| ConvertError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConvertError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_source_image(&path) {
            sources.push(path);
        } else {
            debug!(path = %path.display(), "skipping");
        }
    }
    sources.sort();
    Ok(sources)
}

/// Width/height after fitting `width` into `max_width`, aspect preserved.
pub fn target_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scaled = (f64::from(height) * f64::from(max_width) / f64::from(width)).round();
    (max_width, (scaled as u32).max(1))
}

pub fn output_path(source: &Path, variant: SizeVariant, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    source.with_file_name(variant_file_name(stem, variant, format.extension()))
}

fn decode(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ConvertError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn encode(
    image: &DynamicImage,
    target: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<(), ConvertError> {
    let file = File::create(target).map_err(|source| ConvertError::Write {
        path: target.to_path_buf(),
        source,
    })?;
    write_encoded(image, BufWriter::new(file), format, quality, target)
}

/// Encodes into `writer` and flushes it; a failed flush is a failed write.
fn write_encoded<W: Write>(
    image: &DynamicImage,
    mut writer: W,
    format: OutputFormat,
    quality: u8,
    target: &Path,
) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::Write {
        path: target.to_path_buf(),
        source,
    };
    match format {
        OutputFormat::Webp => {
            let rgba = image.to_rgba8();
            let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
                .encode_simple(false, f32::from(quality))
                .map_err(|err| ConvertError::WebP {
                    path: target.to_path_buf(),
                    reason: format!("{err:?}"),
                })?;
            writer.write_all(&encoded).map_err(write_error)?;
        }
        OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut writer, quality)
            .encode_image(&image.to_rgb8())
            .map_err(|source| ConvertError::Encode {
                path: target.to_path_buf(),
                source,
            })?,
    }
    writer.flush().map_err(write_error)
}

/// Writes both variants of one original, returning their paths.
pub fn convert_file(source: &Path, plan: &Plan) -> Result<Vec<PathBuf>, ConvertError> {
    let original = decode(source)?;
    let mut written = Vec::with_capacity(2);

    for spec in plan.variants() {
        let (width, height) = target_size(original.width(), original.height(), spec.max_width);
        let resized = if width == original.width() {
            original.clone()
        } else {
            original.resize_exact(width, height, FilterType::Lanczos3)
        };
        let target = output_path(source, spec.variant, plan.format);
        encode(&resized, &target, plan.format, spec.quality)?;
        debug!(target = %target.display(), width, height, "wrote variant");
        written.push(target);
    }
    Ok(written)
}

/// Converts every original in `dir`. One bad file does not stop the rest.
pub fn run(dir: &Path, plan: &Plan) -> Result<Summary, ConvertError> {
    let sources = find_sources(dir)?;
    let mut summary = Summary::default();

    if sources.is_empty() {
        warn!(dir = %dir.display(), "no images found");
        return Ok(summary);
    }
    info!(count = sources.len(), dir = %dir.display(), "converting");

    for source in &sources {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match convert_file(source, plan) {
            Ok(_) => {
                info!(file = %name, "converted to thumb & full");
                summary.converted += 1;
            }
            Err(err) => {
                error!(file = %name, error = %err, "conversion failed");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
