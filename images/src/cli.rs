//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::convert::{OutputFormat, Plan, VariantSpec};
use ui::gallery::SizeVariant;

#[derive(Debug, Parser)]
#[command(
    name = "bluecode-images",
    version,
    about = "Pre-render -thumb and -full variants of every PNG/JPEG in a directory"
)]
pub struct Cli {
    /// Directory holding the original images (not searched recursively).
    #[arg(short, long, env = "BLUECODE_IMAGES_DIR", default_value = "public/images")]
    pub dir: PathBuf,

    /// Maximum width of the grid/carousel variant.
    #[arg(long, env = "BLUECODE_THUMB_WIDTH", default_value_t = 900)]
    pub thumb_width: u32,

    /// Maximum width of the lightbox variant.
    #[arg(long, env = "BLUECODE_FULL_WIDTH", default_value_t = 1600)]
    pub full_width: u32,

    /// Encoder quality for thumbnails (1-100).
    #[arg(
        long,
        env = "BLUECODE_THUMB_QUALITY",
        default_value_t = 70,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub thumb_quality: u8,

    /// Encoder quality for full-size images (1-100).
    #[arg(
        long,
        env = "BLUECODE_FULL_QUALITY",
        default_value_t = 80,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub full_quality: u8,

    /// Output format of the variants.
    #[arg(long, value_enum, env = "BLUECODE_IMAGES_FORMAT", default_value_t = OutputFormat::Webp)]
    pub format: OutputFormat,

    /// Log every decision (equivalent to RUST_LOG=debug).
    #[arg(short, long, env = "BLUECODE_IMAGES_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    pub fn plan(&self) -> Plan {
        Plan {
            format: self.format,
            thumb: VariantSpec {
                variant: SizeVariant::Thumb,
                max_width: self.thumb_width,
                quality: self.thumb_quality,
            },
            full: VariantSpec {
                variant: SizeVariant::Full,
                max_width: self.full_width,
                quality: self.full_quality,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_match_site_expectations() {
        let cli = Cli::try_parse_from(["bluecode-images"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("public/images"));
        assert_eq!(cli.plan(), Plan::default());
    }

    #[test]
    fn flags_override_plan() {
        let cli = Cli::try_parse_from([
            "bluecode-images",
            "--dir",
            "assets/raw",
            "--thumb-width",
            "480",
            "--format",
            "jpeg",
            "--full-quality",
            "90",
        ])
        .unwrap();
        let plan = cli.plan();
        assert_eq!(plan.thumb.max_width, 480);
        assert_eq!(plan.full.quality, 90);
        assert_eq!(plan.format, OutputFormat::Jpeg);
    }

    #[test]
    fn every_option_has_an_env_override() {
        let command = Cli::command();
        let missing: Vec<_> = command
            .get_arguments()
            .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
            .filter(|arg| arg.get_env().is_none())
            .map(|arg| arg.get_id().to_string())
            .collect();
        assert!(missing.is_empty(), "no env override for {missing:?}");
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["bluecode-images", "--thumb-quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["bluecode-images", "--full-quality", "101"]).is_err());
    }
}
