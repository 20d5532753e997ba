//! Field-by-field prompting for interactive mode.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use idcard::{CardRecord, Field, RawRecord};

pub const BANNER: &str = "Interactive mode activated. Leave blank to re-prompt.";

/// Ask for every field in order, re-asking until a non-blank answer arrives.
pub fn prompt_record<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<CardRecord> {
    writeln!(output, "{}", BANNER)?;
    let mut raw = RawRecord::default();
    for field in Field::ALL {
        let value = prompt_field(input, output, field)?;
        raw.set(field, value);
    }
    Ok(CardRecord::new(&raw)?)
}

fn prompt_field<R: BufRead, W: Write>(input: &mut R, output: &mut W, field: Field) -> Result<String> {
    let mut line = String::new();
    loop {
        write!(output, "Enter {}: ", field.key().to_uppercase())?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            bail!("input closed before {} was entered", field);
        }
        let value = line.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }
}
