use crate::card::render_card;
use crate::config::load_config;
use crate::model::CardData;
use crate::svg::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "statcard", version, about = "Activity stat card renderer (SVG/PNG)")]
pub struct Args {
    /// Input card data (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (card dimensions and themeVariables)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Card width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Card height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Fill the content bounds to visualize padding
    #[arg(long = "debug")]
    pub debug: bool,

    /// Disable the fade-in animation
    #[arg(long = "no-animation")]
    pub no_animation: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.card.width = width;
    }
    if let Some(height) = args.height {
        config.card.height = height;
    }
    if args.debug {
        config.card.debug = true;
    }
    if args.no_animation {
        config.card.animate = false;
    }

    let input = read_input(args.input.as_deref())?;
    let data = CardData::from_json(&input)?;

    let document = render_card(&data, &config.card, &config.theme);
    let svg = render_svg(&document);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_png(&svg, &output)?;
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path) -> Result<()> {
    crate::svg::write_output_png(svg, output)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_requires_an_output_path() {
        let err = ensure_output(&None, "png").unwrap_err();
        assert!(err.to_string().contains("png"));
    }

    #[test]
    fn explicit_output_path_is_kept() {
        let path = ensure_output(&Some(PathBuf::from("card.png")), "png").unwrap();
        assert_eq!(path, PathBuf::from("card.png"));
    }
}
