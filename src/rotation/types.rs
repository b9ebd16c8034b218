use chrono::NaiveDate;
use thiserror::Error;

/// Borne de fin d'un balayage de relèves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferWindow {
    /// `n` jours à partir de la date de départ incluse.
    Days(u32),
    /// Jusqu'à cette date incluse.
    Until(NaiveDate),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid team {team}: expected 1..={teams_count}")]
    InvalidTeam { team: u8, teams_count: u8 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("date arithmetic overflow")]
    DateOverflow,
}
