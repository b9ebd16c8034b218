use crate::model::ShiftAssignment;
use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SPAN_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Planning d'une équipe sur une période, tel qu'exporté.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSchedule {
    pub team: u8,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub shifts: Vec<ShiftAssignment>,
}

/// Convertit une saisie utilisateur en date : `today`, `YYYY-MM-DD` ou RFC3339
/// (la partie date locale de l'instant est conservée).
pub fn parse_date(raw: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
        return Ok(dt.naive_local().date());
    }
    bail!("invalid date: {raw} (expected YYYY-MM-DD, RFC3339 or `today`)")
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &TeamSchedule) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(schedule)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV: header `date,code,shift,start,end` ; `start`/`end` vides les jours de repos.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &TeamSchedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["date", "code", "shift", "start", "end"])?;
    for a in &schedule.shifts {
        let (start, end) = match a.span() {
            Some((s, e)) => (format_instant(s), format_instant(e)),
            None => (String::new(), String::new()),
        };
        let date = a.date.to_string();
        w.write_record([
            date.as_str(),
            a.code.as_str(),
            a.shift.name(),
            start.as_str(),
            end.as_str(),
        ])?;
    }
    let data = w
        .into_inner()
        .map_err(|e| anyhow::Error::new(e.into_error()))
        .context("flushing csv")?;
    write_atomic(path.as_ref(), &data)
}

fn format_instant(at: NaiveDateTime) -> String {
    at.format(SPAN_FORMAT).to_string()
}

/// Écrit via un fichier temporaire voisin puis renomme.
fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_inputs() {
        let today = ymd(2025, 6, 1);
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date(" 2025-01-15 ", today).unwrap(), ymd(2025, 1, 15));
        assert_eq!(
            parse_date("2025-01-15T23:30:00+01:00", today).unwrap(),
            ymd(2025, 1, 15)
        );
        assert!(parse_date("15/01/2025", today).is_err());
        assert!(parse_date("2025-02-30", today).is_err());
    }
}
