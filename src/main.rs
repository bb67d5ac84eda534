//! `solidcolor` command line front end.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use solidcolor::{
    Color, GenerateRequest, Resolution, ResolutionSpec, ScreenSource, SolidColorError,
    SystemScreen,
};

const EXAMPLES: &str = "\
Examples:
  solidcolor -c '#FF5733' -o output.png
  solidcolor -c 3498DB --fullhd -o blue.jpg -q 90
  solidcolor -c '#00FF00' -r 800x600 -o green.bmp
  solidcolor -c '#FF573380' -o semi-transparent.png
  solidcolor -c '#0000FF40' --fullhd -o blue-25-percent.png";

/// Generate a solid color PNG, JPEG or BMP image.
#[derive(Parser, Debug)]
#[clap(version, about, after_help = EXAMPLES)]
struct Cli {
    /// Color as #RGB, #RRGGBB or #RRGGBBAA (alpha 00 = transparent, FF = opaque)
    #[arg(short, long, value_name = "HEX", default_value = "#000000")]
    color: Color,

    /// Output file path; the extension selects the format unless --format is given
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Resolution, e.g. 1920x1080
    #[arg(short, long, value_name = "WxH", group = "size")]
    resolution: Option<Resolution>,

    /// Use the screen resolution (the default when no size is given)
    #[arg(short, long, group = "size")]
    auto: bool,

    /// Output format: png, jpg, jpeg or bmp. JPEG does not support transparency
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// JPEG quality, clamped to 0-100
    #[arg(
        short,
        long,
        value_name = "0-100",
        default_value_t = 95,
        allow_negative_numbers = true
    )]
    quality: i32,

    /// 1280x720
    #[arg(long, group = "size")]
    hd: bool,

    /// 1920x1080
    #[arg(long, group = "size")]
    fullhd: bool,

    /// 2560x1440
    #[arg(long, group = "size")]
    qhd: bool,

    /// 3840x2160
    #[arg(long = "4k", group = "size")]
    uhd_4k: bool,
}

impl Cli {
    fn resolution_spec(&self) -> ResolutionSpec {
        if let Some(resolution) = self.resolution {
            return ResolutionSpec::Fixed(resolution);
        }
        if self.auto {
            return ResolutionSpec::Detect;
        }
        let presets = [
            (self.hd, Resolution::HD),
            (self.fullhd, Resolution::FULL_HD),
            (self.qhd, Resolution::QHD),
            (self.uhd_4k, Resolution::UHD_4K),
        ];
        presets
            .into_iter()
            .find_map(|(set, preset)| set.then_some(ResolutionSpec::Fixed(preset)))
            .unwrap_or(ResolutionSpec::Detect)
    }
}

/// Resolve `spec`, telling the user what detection found. A failed
/// detection is a warning on stderr and falls back to Full HD.
fn pick_resolution(
    spec: ResolutionSpec,
    screen: &dyn ScreenSource,
    out: &mut dyn Write,
) -> io::Result<Resolution> {
    match spec {
        ResolutionSpec::Fixed(resolution) => Ok(resolution),
        ResolutionSpec::Detect => match Resolution::detect(screen) {
            Ok(detected) => {
                writeln!(out, "Detected screen resolution: {detected}")?;
                Ok(detected)
            }
            Err(e) => {
                eprintln!(
                    "{} {e}; using Full HD ({})",
                    "warning:".yellow().bold(),
                    Resolution::FULL_HD
                );
                Ok(Resolution::FULL_HD)
            }
        },
    }
}

/// Print clap's help, version or usage error and pick the exit code.
///
/// Help and version are successes unless they could not be printed.
fn parse_error_exit(e: &clap::Error) -> u8 {
    let printed = e.print();
    if let Err(io) = &printed {
        log::error!("could not print {:?} output: {io}", e.kind());
    }
    if e.use_stderr() || printed.is_err() { 1 } else { 0 }
}

fn run(cli: &Cli) -> Result<(), SolidColorError> {
    let mut request = GenerateRequest::new(cli.color, &cli.output).with_quality(cli.quality);
    if let Some(format) = &cli.format {
        request = request.with_format(format.as_str());
    }
    let format = request.resolve_format()?;

    let resolution = pick_resolution(cli.resolution_spec(), &SystemScreen, &mut io::stdout())?;
    let request = request.with_resolution(resolution);

    println!(
        "Generating {resolution} {} image with color {}...",
        format.name, cli.color
    );
    if !cli.color.is_opaque() {
        println!(
            "Note: color has transparency (alpha = {}/255)",
            cli.color.alpha()
        );
        if !format.supports_transparency {
            println!(
                "Note: {} does not support transparency, alpha will be dropped",
                format.name
            );
        }
    }

    let written = request.generate()?;
    println!("Image successfully saved to: {}", written.path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return ExitCode::from(parse_error_exit(&e)),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
