//! Calendar Implementation

use crate::CalendarError;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

fn parse_date(date: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| CalendarError::BadDate {
        date: date.to_string(),
    })
}

fn midnight_ms(date: NaiveDate) -> i64 {
    // UTC midnight: the crawler keys days by millisecond timestamp, and the
    // mapping must not depend on the machine's local timezone.
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Convert a `YYYY-MM-DD` date to its midnight epoch-millisecond timestamp.
pub fn to_timestamp_ms(date: &str) -> Result<i64, CalendarError> {
    Ok(midnight_ms(parse_date(date)?))
}

/// Expand an inclusive date range into one midnight timestamp per day.
pub fn date_range_timestamps(start: &str, end: &str) -> Result<Vec<i64>, CalendarError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Ok(start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(midnight_ms)
        .collect())
}

/// The set of known DDoS-attack days, loaded from a `dosday` table.
#[derive(Debug, Clone, Default)]
pub struct AttackCalendar {
    attack_days: BTreeSet<i64>,
}

impl AttackCalendar {
    /// Load the attack-day set from a CSV table with a `dosday` column.
    ///
    /// Entries may be `YYYY-MM-DD` dates or already-converted millisecond
    /// timestamps; both forms appear in the crawler's metadata files.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| CalendarError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let csv_err = |source: csv::Error| CalendarError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        let dosday = headers
            .iter()
            .position(|h| h == "dosday")
            .ok_or(CalendarError::MissingColumn {
                path: path.to_path_buf(),
                column: "dosday",
            })?;

        let mut attack_days = BTreeSet::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let field = record.get(dosday).unwrap_or("").trim();
            if field.is_empty() {
                continue;
            }
            let timestamp = match field.parse::<i64>() {
                Ok(ms) => ms,
                Err(_) => to_timestamp_ms(field)?,
            };
            attack_days.insert(timestamp);
        }

        debug!(days = attack_days.len(), "loaded attack calendar");
        Ok(Self { attack_days })
    }

    /// Whether the given midnight timestamp is a known attack day.
    pub fn is_attack_day(&self, timestamp_ms: i64) -> bool {
        self.attack_days.contains(&timestamp_ms)
    }

    /// Number of known attack days.
    pub fn len(&self) -> usize {
        self.attack_days.len()
    }

    /// True when no attack days are known.
    pub fn is_empty(&self) -> bool {
        self.attack_days.is_empty()
    }

    /// Split a sequence of day timestamps into (attack, normal), preserving
    /// order. This is the partition the crawler uses to route each day's
    /// blocks into its category directory.
    pub fn partition(&self, timestamps: &[i64]) -> (Vec<i64>, Vec<i64>) {
        timestamps
            .iter()
            .copied()
            .partition(|ts| self.is_attack_day(*ts))
    }
}

/// Convert a `servByDate.csv`-style table (`dosday` dates plus `postlink`)
/// into the millisecond `timestamp.csv` the crawler consumes.
pub fn write_timestamp_table(input: &Path, output: &Path) -> Result<(), CalendarError> {
    let mut reader = csv::Reader::from_path(input).map_err(|source| CalendarError::Csv {
        path: input.to_path_buf(),
        source,
    })?;
    let in_err = |source: csv::Error| CalendarError::Csv {
        path: input.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(in_err)?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(CalendarError::MissingColumn {
                path: input.to_path_buf(),
                column: name,
            })
    };
    let dosday = column("dosday")?;
    let postlink = column("postlink")?;

    let out_err = |source: csv::Error| CalendarError::Csv {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(output).map_err(out_err)?;
    writer.write_record(["dosday", "postlink"]).map_err(out_err)?;

    for record in reader.records() {
        let record = record.map_err(in_err)?;
        let date = record.get(dosday).unwrap_or("").trim();
        let link = record.get(postlink).unwrap_or("");
        let timestamp = to_timestamp_ms(date)?;
        writer
            .write_record([timestamp.to_string().as_str(), link])
            .map_err(out_err)?;
    }

    writer.flush().map_err(|source| CalendarError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(())
}
