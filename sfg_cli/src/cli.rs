use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use sfg::prelude::*;

use crate::logging::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "sfg", version, about = "SFP/SFP+ firmware generator")]
pub struct Cli {
    /// `<vendor>` name (string 16 bytes max)
    #[arg(short = 'v', value_name = "vendor", default_value = "")]
    pub vendor: String,

    /// `<serial>` number (string 16 bytes max)
    #[arg(short = 's', value_name = "serial", default_value = "")]
    pub serial: String,

    /// Transceiver vendor whose id and key sign the image
    #[arg(short = 't', long, value_enum, default_value_t = Transceiver::Finisar)]
    pub transceiver: Transceiver,

    /// Directory the image is written to
    #[arg(short = 'o', long, value_name = "dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Log level, `RUST_LOG` takes precedence
    #[arg(long, value_enum, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transceiver {
    Finisar,
    Avago,
}

impl Transceiver {
    /// Vendor name in the built-in platform profile.
    pub fn profile_vendor(self) -> &'static str {
        match self {
            Self::Finisar => "finisar",
            Self::Avago => "avago",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Usage,
}

/// Builds and writes one image.
///
/// Bad vendor or serial input prints the usage text on stderr and writes nothing.
/// Any other failure is returned to the caller.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let fields = IdentityField::vendor(&cli.vendor).and_then(|vendor| IdentityField::serial(&cli.serial).map(|serial| (vendor, serial)));
    let (vendor, serial) = match fields {
        Ok(fields) => fields,
        Err(err) if is_input_error(&err) => {
            tracing::debug!(%err, "rejected input");
            Cli::command().write_help(&mut io::stderr())?;
            return Ok(Outcome::Usage);
        }
        Err(err) => return Err(err),
    };

    let profile = Profile::builtin(cli.transceiver.profile_vendor())?;
    let image = Image::build(&profile, vendor, serial);
    let path = cli.out_dir.join(image.file_name());

    let mut stdout = io::stdout();
    write!(stdout, "[*] Writing firmware to file '{}'... ", display_name(cli, &image))?;
    stdout.flush()?;

    image.write(&path)?;

    writeln!(stdout, "OK")?;
    Ok(Outcome::Written(path))
}

/// Bare file name when writing to the working directory, joined path otherwise.
fn display_name(cli: &Cli, image: &Image) -> String {
    if cli.out_dir == Path::new(".") {
        image.file_name()
    } else {
        cli.out_dir.join(image.file_name()).display().to_string()
    }
}

fn is_input_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SFGError>().is_some_and(SFGError::is_input_error)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sfg", "-v", "FNSR", "-s", "ABC123"]).unwrap();

        assert_eq!(cli.vendor, "FNSR");
        assert_eq!(cli.serial, "ABC123");
        assert_eq!(cli.transceiver, Transceiver::Finisar);
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_missing_arguments_parse_as_empty() {
        let cli = Cli::try_parse_from(["sfg"]).unwrap();

        assert!(cli.vendor.is_empty());
        assert!(cli.serial.is_empty());
    }

    #[test]
    fn test_transceiver_names_match_profiles() {
        let vendors = Profile::builtin_vendors().unwrap();
        for transceiver in Transceiver::value_variants() {
            assert!(vendors.iter().any(|v| v == transceiver.profile_vendor()));
        }
    }

    #[test]
    fn test_display_name() {
        let image = Image::new(&Profile::builtin("finisar").unwrap(), "FNSR", "ABC123").unwrap();

        let cli = Cli::try_parse_from(["sfg", "-v", "FNSR", "-s", "ABC123"]).unwrap();
        assert_eq!(display_name(&cli, &image), "FNSR_ABC123.bin");

        let cli = Cli::try_parse_from(["sfg", "-v", "FNSR", "-s", "ABC123", "-o", "out"]).unwrap();
        assert_eq!(display_name(&cli, &image), Path::new("out").join("FNSR_ABC123.bin").display().to_string());
    }

    #[test]
    fn test_run_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["sfg", "-v", "FNSR", "-s", "ABC123", "-o", dir.path().to_str().unwrap()]).unwrap();

        let path = dir.path().join("FNSR_ABC123.bin");
        assert_eq!(run(&cli).unwrap(), Outcome::Written(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap().len(), 128);
    }

    #[test]
    fn test_run_rejects_long_serial_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["sfg", "-v", "FNSR", "-s", "0123456789ABCDEFG", "-o", dir.path().to_str().unwrap()]).unwrap();

        assert_eq!(run(&cli).unwrap(), Outcome::Usage);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
