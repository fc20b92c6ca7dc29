use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, Writer};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    domain::{
        error::Error as DomainError,
        policy::{ParsePolicy, SkipPolicy, MIN_FIELDS},
        record::{parse_cost, CostRecord},
        summary::Summary,
    },
    error::{Error, Result},
    report::cents,
};

const TIMESTAMP_FIELD: usize = 0;
const COST_FIELD: usize = 9;

/// Policies applied to each data row while loading.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadOptions {
    pub skip: SkipPolicy,
    pub parse: ParsePolicy,
}

/// Parse [`CostRecord`]s from a reader.
///
/// The first physical line is always treated as a header and thrown away,
/// whatever it contains, even when it is blank. Rows too short to hold a cost
/// are dropped; what happens to a cost that is not a number depends on
/// [`LoadOptions::parse`].
pub fn read(reader: impl Read, options: LoadOptions) -> Result<Vec<CostRecord>> {
    let mut reader = BufReader::new(reader);
    reader.read_until(b'\n', &mut Vec::new())?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(record) = parse_row(&row, options)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, options: LoadOptions) -> Result<Option<CostRecord>> {
    // Positions restart after the header line we consumed ourselves.
    let line = row.position().map_or(0, |pos| pos.line() + 1);

    if row.len() < MIN_FIELDS {
        if options.skip == SkipPolicy::Warn {
            warn!(line, fields = row.len(), "Skipping row with too few fields");
        }
        return Ok(None);
    }

    let raw_cost = &row[COST_FIELD];
    let Some(cost) = parse_cost(raw_cost) else {
        return match options.parse {
            ParsePolicy::Strict => Err(DomainError::InvalidCost {
                line,
                value: raw_cost.to_owned(),
            }
            .into()),
            ParsePolicy::Lenient => {
                warn!(line, value = raw_cost, "Skipping row with non-numeric cost");
                Ok(None)
            }
        };
    };

    Ok(Some(CostRecord::new(&row[TIMESTAMP_FIELD], cost)))
}

/// Open `path` and parse every cost record in it.
pub fn try_load(path: impl AsRef<Path>, options: LoadOptions) -> Result<Vec<CostRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::FileError(err),
    })?;

    let records = read(file, options)?;
    debug!(path = %path.display(), records = records.len(), "Loaded cost records");

    Ok(records)
}

/// Like [`try_load`], but a file that cannot be loaded is reported on stdout
/// and yields no records.
pub fn load(path: impl AsRef<Path>, options: LoadOptions) -> Vec<CostRecord> {
    try_load(path, options).unwrap_or_else(|err| {
        println!("{}", load_failure_message(&err));
        Vec::new()
    })
}

fn load_failure_message(err: &Error) -> String {
    match err {
        Error::FileNotFound(_) => format!("Error: {err}"),
        _ => format!("Error reading file: {err}"),
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    date: &'a str,
    total_cost: String,
    count: usize,
    row_cost: String,
}

/// Write one CSV row per date, in date order.
pub fn write(summary: &Summary, writer: impl Write) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    for day in summary.dates() {
        writer.serialize(SummaryRow {
            date: &day.date,
            total_cost: cents(day.total_cost),
            count: day.count,
            row_cost: cents(day.row_cost()),
        })?;
    }

    writer.flush()?;
    Ok(())
}
