//! gridstore CLI - read and edit spreadsheet rows, columns and sheets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridstore::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grid")]
#[command(author, version, about = "Read and edit spreadsheet rows, columns and sheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// Print a block of a sheet as delimited text
    Dump {
        /// Input spreadsheet file
        input: PathBuf,

        /// Sheet index or name (default: first sheet)
        #[arg(short, long, default_value = "0")]
        sheet: String,

        /// Row bounds as START:END (0-based, END exclusive, either side optional)
        #[arg(short, long)]
        rows: Option<String>,

        /// Column bounds as START:END (0-based, END exclusive, either side optional)
        #[arg(short, long)]
        cols: Option<String>,

        /// Field delimiter (default: tab)
        #[arg(short, long, default_value = "\t")]
        delimiter: char,
    },

    /// Print one row, one value per line
    Row {
        /// Input spreadsheet file
        input: PathBuf,

        /// Row index (0-based)
        row: usize,

        /// Sheet index or name (default: first sheet)
        #[arg(short, long, default_value = "0")]
        sheet: String,
    },

    /// Print one column, one value per line
    Col {
        /// Input spreadsheet file
        input: PathBuf,

        /// Column index (0-based)
        col: usize,

        /// Sheet index or name (default: first sheet)
        #[arg(short, long, default_value = "0")]
        sheet: String,
    },

    /// Insert a new empty sheet
    CreateSheet {
        /// Input spreadsheet file
        input: PathBuf,

        /// Name of the new sheet
        name: String,

        /// Insert position; negative values count back from the end
        #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
        index: isize,

        /// Write the result here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write values into one row
    WriteRow {
        /// Input spreadsheet file
        input: PathBuf,

        /// Row index (0-based)
        row: usize,

        /// Values to write; TRUE/FALSE and numbers are typed, the rest is text
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Sheet index or name (default: first sheet)
        #[arg(short, long, default_value = "0")]
        sheet: String,

        /// First column to write (0-based)
        #[arg(long)]
        start_col: Option<usize>,

        /// Write the result here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Dump {
            input,
            sheet,
            rows,
            cols,
            delimiter,
        } => dump(&input, &sheet, rows.as_deref(), cols.as_deref(), delimiter),
        Commands::Row { input, row, sheet } => print_row(&input, &sheet, row),
        Commands::Col { input, col, sheet } => print_col(&input, &sheet, col),
        Commands::CreateSheet {
            input,
            name,
            index,
            output,
        } => create_sheet(&input, &name, index, output.as_deref()),
        Commands::WriteRow {
            input,
            row,
            values,
            sheet,
            start_col,
            output,
        } => write_row(&input, &sheet, row, &values, start_col, output.as_deref()),
    }
}

fn open(input: &Path) -> Result<XlsxStore> {
    gridstore::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

/// Resolve a sheet given by index or by name
fn resolve_sheet(store: &XlsxStore, sheet: &str) -> Result<usize> {
    let by_position = sheet
        .parse::<usize>()
        .ok()
        .and_then(|index| store.sheet_index(index));
    by_position
        .or_else(|| store.sheet_index(sheet))
        .with_context(|| format!("Sheet '{}' not found", sheet))
}

/// Parse `START:END` where either side may be omitted
fn parse_bounds(text: &str) -> Result<(Option<usize>, Option<usize>)> {
    let (start, end) = text
        .split_once(':')
        .with_context(|| format!("Expected START:END, got '{}'", text))?;

    let parse = |part: &str| -> Result<Option<usize>> {
        let part = part.trim();
        if part.is_empty() {
            return Ok(None);
        }
        part.parse()
            .map(Some)
            .with_context(|| format!("Invalid index '{}'", part))
    };

    Ok((parse(start)?, parse(end)?))
}

/// Type a command-line value: booleans, then numbers, then text
fn parse_value(text: &str) -> CellValue {
    if text.is_empty() {
        return CellValue::Empty;
    }
    match text.to_uppercase().as_str() {
        "TRUE" => return CellValue::Boolean(true),
        "FALSE" => return CellValue::Boolean(false),
        _ => {}
    }
    // "nan" and "inf" parse as f64 but cannot be stored as numbers
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::string(text),
    }
}

/// Convert a CellValue to delimiter-safe text
fn format_value(value: &CellValue, delimiter: char) -> String {
    let text = match value {
        CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        other => other.to_string(),
    };

    // Quote if necessary
    if text.contains(delimiter) || text.contains('"') || text.contains('\n') || text.contains('\r')
    {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

fn list_sheets(input: &Path) -> Result<()> {
    let store = open(input)?;

    for (i, name) in store.get_sheets().iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

fn dump(
    input: &Path,
    sheet: &str,
    rows: Option<&str>,
    cols: Option<&str>,
    delimiter: char,
) -> Result<()> {
    let store = open(input)?;
    let sheet = resolve_sheet(&store, sheet)?;
    let (start_row, end_row) = rows.map(parse_bounds).transpose()?.unwrap_or_default();
    let (start_col, end_col) = cols.map(parse_bounds).transpose()?.unwrap_or_default();

    let data = store.get_data(sheet, start_row, end_row, start_col, end_col);

    let mut output = String::new();
    for row in &data {
        let line: Vec<String> = row.iter().map(|v| format_value(v, delimiter)).collect();
        output.push_str(&line.join(&delimiter.to_string()));
        output.push('\n');
    }

    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}

fn print_values(values: Option<Vec<CellValue>>, what: &str) -> Result<()> {
    let Some(values) = values else {
        bail!("{} is out of range", what);
    };

    let mut stdout = io::stdout().lock();
    for value in &values {
        writeln!(stdout, "{}", format_value(value, '\t')).context("Failed to write to stdout")?;
    }
    Ok(())
}

fn print_row(input: &Path, sheet: &str, row: usize) -> Result<()> {
    let store = open(input)?;
    let sheet = resolve_sheet(&store, sheet)?;
    print_values(store.get_row(sheet, row, None, None), &format!("Row {}", row))
}

fn print_col(input: &Path, sheet: &str, col: usize) -> Result<()> {
    let store = open(input)?;
    let sheet = resolve_sheet(&store, sheet)?;
    print_values(store.get_col(sheet, col, None, None), &format!("Column {}", col))
}

fn save(store: &mut XlsxStore, output: Option<&Path>) -> Result<()> {
    let target = output.unwrap_or_else(|| store.book_path()).to_path_buf();
    if !store.save_as(&target) {
        bail!("Failed to save '{}'", target.display());
    }
    eprintln!("Saved '{}'", target.display());
    Ok(())
}

fn create_sheet(input: &Path, name: &str, index: isize, output: Option<&Path>) -> Result<()> {
    let mut store = open(input)?;
    if !store.create_sheet(name, index) {
        bail!("Could not create sheet '{}'", name);
    }
    save(&mut store, output)
}

fn write_row(
    input: &Path,
    sheet: &str,
    row: usize,
    values: &[String],
    start_col: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let mut store = open(input)?;
    let sheet = resolve_sheet(&store, sheet)?;
    let data: Vec<CellValue> = values.iter().map(|v| parse_value(v)).collect();

    if !store.write_row(sheet, row, &data, start_col, None) {
        bail!("Could not write row {}", row);
    }
    save(&mut store, output)
}
