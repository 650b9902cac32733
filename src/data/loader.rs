//! Line-of-code dataset loader (CSV)

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;
use serde::Deserialize;

use super::DataError;
use crate::model::LineRecord;

/// Accepts `+HH:MM`, `+HHMM` and `Z`
static TIMEZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(Z)|([+-])(\d{2}):?(\d{2}))$").expect("Invalid timezone regex")
});

/// One CSV row before any field is interpreted
#[derive(Debug, Deserialize)]
struct RawRow {
    commit: String,
    file: String,
    line: String,
    depth: String,
    length: String,
    date: String,
    #[serde(default)]
    time: String,
    timezone: String,
    datetime: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    change: String,
    #[serde(rename = "type", default)]
    language: String,
}

/// Load line records from a CSV file
pub fn load_records(path: &Path) -> Result<Vec<LineRecord>, DataError> {
    let file = File::open(path)?;
    read_records(file)
}

/// Read line records from any CSV source
///
/// The first row must be the header. Any field that fails to parse aborts
/// the whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<LineRecord>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (idx, raw) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = raw?;
        records.push(parse_row(idx + 1, raw)?);
    }

    log::debug!("parsed {} line records", records.len());
    Ok(records)
}

fn parse_row(row: usize, raw: RawRow) -> Result<LineRecord, DataError> {
    let line = parse_int(row, "line", &raw.line)?;
    let depth = parse_int(row, "depth", &raw.depth)?;
    let length = parse_int(row, "length", &raw.length)?;
    let offset = parse_timezone(&raw.timezone).ok_or_else(|| DataError::Parse {
        row,
        field: "timezone",
        value: raw.timezone.clone(),
    })?;
    let date = local_midnight(&raw.date, offset).ok_or_else(|| DataError::Parse {
        row,
        field: "date",
        value: raw.date.clone(),
    })?;
    let datetime =
        DateTime::parse_from_rfc3339(&raw.datetime).map_err(|_| DataError::Parse {
            row,
            field: "datetime",
            value: raw.datetime.clone(),
        })?;

    Ok(LineRecord {
        commit: raw.commit,
        file: raw.file,
        line,
        depth,
        length,
        date,
        time: raw.time,
        timezone: raw.timezone,
        datetime,
        author: raw.author,
        change: raw.change,
        language: raw.language,
    })
}

fn parse_int(row: usize, field: &'static str, value: &str) -> Result<u32, DataError> {
    value.parse::<u32>().map_err(|_| DataError::Parse {
        row,
        field,
        value: value.to_string(),
    })
}

/// Parse a timezone token into a fixed UTC offset
pub(crate) fn parse_timezone(token: &str) -> Option<FixedOffset> {
    let caps = TIMEZONE_REGEX.captures(token)?;
    if caps.get(1).is_some() {
        return FixedOffset::east_opt(0);
    }
    let hours: i32 = caps[3].parse().ok()?;
    let minutes: i32 = caps[4].parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;
    match &caps[2] {
        "-" => FixedOffset::west_opt(seconds),
        _ => FixedOffset::east_opt(seconds),
    }
}

/// `date` + `T00:00` in the given offset
fn local_midnight(date: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    offset
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
}
