//! Command-line interface wiring for the `idcard` binary.
//!
//! Resolves exactly one input mode per run and hands the resulting
//! record(s) to the library renderer.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use idcard::{CardFonts, CardRecord, CardRenderer, Field, RawRecord, process_csv};

pub mod prompt;

/// Parsed CLI entrypoint for the `idcard` binary.
#[derive(Parser, Debug)]
#[command(name = "idcard", version, about = "ID Card Generator")]
pub struct Cli {
    /// CSV file path (header: company,name,gender,dob,mobile,address).
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output directory.
    #[arg(long, env = "IDCARD_OUT", default_value = "output")]
    pub out: PathBuf,
    /// Single mode: render one card from the field flags.
    #[arg(long)]
    pub single: bool,
    /// TrueType font used for every card.
    #[arg(long, env = "IDCARD_FONT", default_value = "assets/DejaVuSans.ttf")]
    pub font: PathBuf,

    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub dob: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

/// The one input mode selected for a run.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Csv(PathBuf),
    Single(CardRecord),
    Interactive,
}

impl Mode {
    /// Pick the mode from the parsed flags. `--single` wins over `--input`.
    ///
    /// Single mode is validated here, so an incomplete record fails before
    /// any font is loaded or file is written.
    pub fn resolve(cli: &Cli) -> Result<Mode> {
        let input = cli
            .input
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty());
        match (cli.single, input) {
            (true, _) => {
                let record = CardRecord::new(&cli.raw_record())
                    .context("--single needs --company, --name, --gender, --dob, --mobile and --address")?;
                Ok(Mode::Single(record))
            }
            (false, Some(path)) => Ok(Mode::Csv(path.clone())),
            (false, None) => Ok(Mode::Interactive),
        }
    }
}

impl Cli {
    fn raw_record(&self) -> RawRecord {
        let mut raw = RawRecord::default();
        for field in Field::ALL {
            let value = match field {
                Field::Company => &self.company,
                Field::Name => &self.name,
                Field::Gender => &self.gender,
                Field::Dob => &self.dob,
                Field::Mobile => &self.mobile,
                Field::Address => &self.address,
            };
            if let Some(value) = value {
                raw.set(field, value.as_str());
            }
        }
        raw
    }
}

/// Execute the selected mode.
pub fn run(cli: Cli) -> Result<()> {
    let mode = Mode::resolve(&cli)?;
    log::debug!("selected mode: {:?}", mode);

    let fonts = CardFonts::load(&cli.font)?;
    let renderer = CardRenderer::new(fonts);

    match mode {
        Mode::Csv(path) => {
            let written = process_csv(&renderer, &path, &cli.out)?;
            println!(
                "Rendered {} card(s) to {}",
                written.len(),
                cli.out.display()
            );
        }
        Mode::Single(record) => {
            let path = renderer.render(&record, &cli.out)?;
            println!("Rendered card to {}", path.display());
        }
        Mode::Interactive => {
            let stdin = io::stdin();
            let record = prompt::prompt_record(&mut stdin.lock(), &mut io::stdout())?;
            let path = renderer.render(&record, &cli.out)?;
            println!("Rendered card to {}", path.display());
        }
    }
    Ok(())
}
