//! Sheetpick CLI - range extraction tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sheetpick::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetpick")]
#[command(
    author,
    version,
    about = "Extract rectangular spreadsheet ranges as strings, lists, or keyed maps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Range arguments shared by the extraction subcommands
#[derive(clap::Args)]
struct RangeArgs {
    /// Input document (csv, tsv)
    input: PathBuf,

    /// Sheet name (default: Sheet1)
    #[arg(short, long, default_value = "Sheet1")]
    sheet: String,

    /// Row range, N or N:M inclusive (default: 1)
    #[arg(short, long, default_value = "1")]
    rows: String,

    /// Column range, N or N:M inclusive (default: 1)
    #[arg(short, long, default_value = "1")]
    cols: String,

    /// Keep empty cells and empty units in the output
    #[arg(long)]
    keep_empty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Rows,
    Columns,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Rows => Axis::Rows,
            AxisArg::Columns => Axis::Columns,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the single cell at a coordinate
    Get {
        /// Input document (csv, tsv)
        input: PathBuf,

        /// Sheet name (default: Sheet1)
        #[arg(short, long, default_value = "Sheet1")]
        sheet: String,

        /// Row (1-based)
        #[arg(short, long, default_value = "1")]
        row: u32,

        /// Column (1-based)
        #[arg(short, long, default_value = "1")]
        col: u32,
    },

    /// Join each row (or column) of a range into delimited strings
    Text {
        #[command(flatten)]
        range: RangeArgs,

        /// Outer axis for the walk
        #[arg(short, long, value_enum, default_value_t = AxisArg::Rows)]
        axis: AxisArg,

        /// Delimiter between cells (default: space, or nothing for a
        /// single-column range)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// strftime pattern for date-time cells
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Emit a range's raw values as JSON
    List {
        #[command(flatten)]
        range: RangeArgs,

        /// Outer axis for the walk
        #[arg(short, long, value_enum, default_value_t = AxisArg::Rows)]
        axis: AxisArg,
    },

    /// Emit a keyed mapping as a JSON object
    Keyed {
        #[command(flatten)]
        range: RangeArgs,

        /// Axis the keys run along
        #[arg(short, long, value_enum, default_value_t = AxisArg::Columns)]
        axis: AxisArg,

        /// Explicit comma-separated key names (default: derived from
        /// header cells)
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Header row/column index for derived keys
        #[arg(long, default_value = "1")]
        key_index: u32,
    },

    /// Show information about a document
    Info {
        /// Input document
        input: PathBuf,
    },

    /// List all sheets in a document
    Sheets {
        /// Input document
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            input,
            sheet,
            row,
            col,
        } => get(&input, &sheet, row, col),
        Commands::Text {
            range,
            axis,
            delimiter,
            date_format,
        } => text(&range, axis.into(), delimiter, date_format),
        Commands::List { range, axis } => list(&range, axis.into()),
        Commands::Keyed {
            range,
            axis,
            keys,
            key_index,
        } => keyed(&range, axis.into(), keys, key_index),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

/// Parse "N" or "N:M" into an inclusive span
fn parse_span(s: &str) -> Result<Span> {
    match s.split_once(':') {
        Some((start, end)) => {
            let start: u32 = start.trim().parse().context("invalid range start")?;
            let end: u32 = end.trim().parse().context("invalid range end")?;
            Ok(Span::inclusive(start, end))
        }
        None => {
            let n: u32 = s.trim().parse().context("invalid range index")?;
            Ok(Span::single(n))
        }
    }
}

fn open_reader<'a>(workbook: &'a Workbook, args: &RangeArgs) -> Result<RangeReader<'a>> {
    let sheet = workbook
        .require_sheet(&args.sheet)
        .with_context(|| format!("Sheet '{}' not found", args.sheet))?;

    Ok(RangeReader::with_options(
        sheet,
        ReaderOptions {
            rows: parse_span(&args.rows)?,
            cols: parse_span(&args.cols)?,
            skip_empty: !args.keep_empty,
            ..Default::default()
        },
    ))
}

fn open_workbook(input: &PathBuf) -> Result<Workbook> {
    Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn get(input: &PathBuf, sheet_name: &str, row: u32, col: u32) -> Result<()> {
    let workbook = open_workbook(input)?;
    let sheet = workbook
        .require_sheet(sheet_name)
        .with_context(|| format!("Sheet '{}' not found", sheet_name))?;

    let reader = RangeReader::new(sheet);
    println!("{}", reader.scalar_at(row, col));
    Ok(())
}

fn text(
    args: &RangeArgs,
    axis: Axis,
    delimiter: Option<String>,
    date_format: Option<String>,
) -> Result<()> {
    let workbook = open_workbook(&args.input)?;
    let reader = open_reader(&workbook, args)?;

    let result = reader.collect(&CollectOptions {
        kind: OutputKind::Text,
        axis: Some(axis),
        delimiter,
        date_format,
        alerts: Some(false),
        ..Default::default()
    });

    match result {
        Collected::Text(line) => println!("{}", line),
        Collected::TextList(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        other => bail!("unexpected text result shape: {:?}", other),
    }
    Ok(())
}

fn list(args: &RangeArgs, axis: Axis) -> Result<()> {
    let workbook = open_workbook(&args.input)?;
    let reader = open_reader(&workbook, args)?;

    let result = reader.collect(&CollectOptions {
        kind: OutputKind::List,
        axis: Some(axis),
        alerts: Some(false),
        ..Default::default()
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to serialize result")?
    );
    Ok(())
}

fn keyed(args: &RangeArgs, axis: Axis, keys: Option<Vec<String>>, key_index: u32) -> Result<()> {
    let workbook = open_workbook(&args.input)?;
    let reader = open_reader(&workbook, args)?;

    let map = reader.keyed(&KeyedOptions {
        axis,
        key_names: keys,
        key_index,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&map).context("Failed to serialize result")?
    );
    Ok(())
}

fn show_info(input: &PathBuf) -> Result<()> {
    let workbook = open_workbook(input)?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        match sheet.dimensions() {
            Some((rows, cols)) => {
                println!("    Populated extent: {} rows x {} columns", rows, cols);
                println!("    Cells: {}", sheet.cell_count());
            }
            None => println!("    Populated extent: empty"),
        }
    }

    Ok(())
}

fn list_sheets(input: &PathBuf) -> Result<()> {
    let workbook = open_workbook(input)?;

    for (i, name) in workbook.sheet_names().iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}
