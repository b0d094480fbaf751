//! slidetext CLI
//!
//! Converts an HTML fragment to slide text runs and prints them as JSON.
//!
//! - slidetext notes.html --css theme.css --pretty
//! - slidetext --html '<p>Hello <b>world</b></p>' --summary

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use slidetext::{Bullet, ConvertOptions, Converter, LinkTarget, TextRun, runs_to_json};
use slidetext_common::warning::set_enabled;

/// Convert HTML and CSS into styled text runs for slide renderers
#[derive(Parser, Debug)]
#[command(name = "slidetext")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Convert a file with a stylesheet
    slidetext notes.html --css theme.css --pretty

    # Convert inline HTML and show a table of the runs
    slidetext --html '<ul><li>One</li><li>Two</li></ul>' --summary

    # Load options from JSON, overriding the base font
    slidetext notes.html --config options.json --font-face Calibri
")]
struct Cli {
    /// HTML file to convert
    #[arg(value_name = "FILE", required_unless_present = "html", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Convert this HTML string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Stylesheet applied by tag name and class
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// JSON options file (`fontFace`, `fontSize`, `css`, `preFontFace`, `paraSpaceBefore`, `paraSpaceAfter`)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base font family
    #[arg(long, value_name = "NAME")]
    font_face: Option<String>,

    /// Base font size in points
    #[arg(long, value_name = "POINTS")]
    font_size: Option<f64>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Do not print warnings about unsupported input
    #[arg(short, long)]
    quiet: bool,

    /// Print a table of the runs to stderr instead of JSON
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        set_enabled(false);
    }

    let options = load_options(&cli)?;
    let html = load_html(&cli)?;
    let runs = Converter::new(options).convert(&html);

    if cli.summary {
        print_summary(&runs);
    } else {
        println!("{}", runs_to_json(&runs, cli.pretty)?);
    }

    Ok(())
}

/// Build options from `--config`, then apply the individual flags on top.
fn load_options(cli: &Cli) -> Result<ConvertOptions> {
    let mut options = match &cli.config {
        Some(path) => ConvertOptions::from_json(&read_file(path)?)
            .with_context(|| format!("Failed to load options from '{}'", path.display()))?,
        None => ConvertOptions::default(),
    };

    if let Some(path) = &cli.css {
        options = options.with_css(read_file(path)?);
    }
    if let Some(font_face) = &cli.font_face {
        options = options.with_font_face(font_face.as_str());
    }
    if let Some(font_size) = cli.font_size {
        options = options.with_font_size(font_size);
    }

    options.validate().context("Invalid command-line options")?;
    Ok(options)
}

fn load_html(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        Ok(html.clone())
    } else if let Some(path) = &cli.path {
        read_file(path)
    } else {
        anyhow::bail!("An HTML file or --html is required")
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// Print one line per run: index, text, font, then the flags that are set.
fn print_summary(runs: &[TextRun]) {
    eprintln!("{}", format!("=== {} runs ===", runs.len()).bold());

    for (index, run) in runs.iter().enumerate() {
        let options = &run.options;
        let text = if run.is_control() {
            "(control)".dimmed().to_string()
        } else {
            format!("{:?}", run.text).green().to_string()
        };

        let mut flags = Vec::new();
        if options.break_line {
            flags.push("break".yellow().to_string());
        }
        if options.bold {
            flags.push("bold".bold().to_string());
        }
        if options.italic {
            flags.push("italic".italic().to_string());
        }
        if options.underline {
            flags.push("underline".underline().to_string());
        }
        if options.strike {
            flags.push("strike".strikethrough().to_string());
        }
        if options.subscript {
            flags.push("sub".to_string());
        }
        if options.superscript {
            flags.push("sup".to_string());
        }
        if let Some(color) = &options.color {
            flags.push(format!("#{color}"));
        }
        if let Some(fill) = &options.fill {
            flags.push(format!("fill #{fill}"));
        }
        if let Some(align) = &options.align {
            flags.push(format!("align {align}"));
        }
        if options.shadow.is_some() {
            flags.push("shadow".to_string());
        }
        match options.bullet {
            Some(Bullet::On(kind)) => flags.push(
                format!("bullet {kind} @{}", options.indent_level.unwrap_or(-1))
                    .magenta()
                    .to_string(),
            ),
            Some(Bullet::Off) => flags.push("bullet off".magenta().to_string()),
            None => {}
        }
        if let Some(link) = &options.hyperlink {
            let target = match &link.target {
                LinkTarget::Slide(slide) => format!("slide {slide}"),
                LinkTarget::Url(url) => url.clone(),
            };
            flags.push(format!("-> {target}").cyan().to_string());
        }

        eprintln!(
            "{:>4}  {text}  {} {}pt  {}",
            index.dimmed(),
            options.font_face,
            options.font_size,
            flags.join(" ")
        );
    }
}
