use crate::calc_engine::{format_number, Expression};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// One line per expression, in order. A failed evaluation becomes an
/// `Error:` line instead of stopping the batch.
pub fn write_lines<W: Write>(expressions: &[Expression], out: &mut W) -> io::Result<()> {
    for expr in expressions {
        match expr.evaluate() {
            Ok(result) => writeln!(out, "{} = {}", expr.describe(), format_number(result))?,
            Err(e) => writeln!(out, "{} = Error: {}", expr.describe(), e)?,
        }
    }
    Ok(())
}

/// Writes the results file and reports on the console. Failing to open the
/// file only skips the write.
pub fn report<W: Write, E: Write>(
    expressions: &[Expression],
    path: &Path,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    info!(count = expressions.len(), path = %path.display(), "writing results");

    let file = match File::create(path)
        .with_context(|| format!("opening {} for writing", path.display()))
    {
        Ok(file) => file,
        Err(e) => {
            error!("{:?}", e);
            writeln!(err, "Error opening file for writing.")?;
            return Ok(());
        }
    };

    let mut file = BufWriter::new(file);
    write_lines(expressions, &mut file).context("writing results")?;
    file.flush().context("flushing results")?;

    writeln!(out, "Results written to {}", path.display())?;
    Ok(())
}
