mod code;
mod engine;
mod lookahead;
mod transfers;
mod types;

pub use code::{current_shift_day, SHIFT_DAY_ROLLOVER_HOUR};
pub use types::{RosterError, TransferWindow};

use crate::calendar;
use crate::config::RosterConfig;
use crate::model::{ShiftAssignment, ShiftKind, TeamShift, TransferEvent};
use chrono::NaiveDate;

/// Moteur de roulement : fonctions pures de (date, équipe) sur une configuration figée.
///
/// Aucune mutation après construction ; partageable entre threads sans verrou.
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    config: RosterConfig,
}

impl Rotation {
    /// Valide la configuration avant de l'accepter.
    pub fn new(config: RosterConfig) -> Result<Self, RosterError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn teams(&self) -> impl Iterator<Item = u8> {
        1..=self.config.teams_count
    }

    pub(crate) fn check_team(&self, team: u8) -> Result<(), RosterError> {
        if team == 0 || team > self.config.teams_count {
            return Err(RosterError::InvalidTeam {
                team,
                teams_count: self.config.teams_count,
            });
        }
        Ok(())
    }

    /// Position `[0, cycle_length)` de l'équipe dans le cycle ce jour-là.
    pub fn cycle_position(&self, date: NaiveDate, team: u8) -> Result<u32, RosterError> {
        engine::cycle_position(self, date, team)
    }

    pub fn shift_for(&self, date: NaiveDate, team: u8) -> Result<ShiftKind, RosterError> {
        engine::shift_for(self, date, team)
    }

    /// Code `YYWW.DX` ; une nuit porte la date de la veille.
    pub fn shift_code(&self, date: NaiveDate, team: u8) -> Result<String, RosterError> {
        code::shift_code(self, date, team)
    }

    pub fn assignment(&self, date: NaiveDate, team: u8) -> Result<ShiftAssignment, RosterError> {
        let shift = self.shift_for(date, team)?;
        Ok(ShiftAssignment {
            date,
            shift,
            code: code::code_for(date, shift)?,
        })
    }

    /// Tous les jours de `[start, end]`, repos compris.
    pub fn schedule(
        &self,
        team: u8,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ShiftAssignment>, RosterError> {
        self.check_team(team)?;
        if end < start {
            return Err(RosterError::InvalidRange { start, end });
        }
        calendar::days_in_range(start, end)
            .map(|d| self.assignment(d, team))
            .collect()
    }

    /// Postes de toutes les équipes pour un jour, par numéro d'équipe croissant.
    pub fn teams_on(&self, date: NaiveDate) -> Result<Vec<TeamShift>, RosterError> {
        self.teams()
            .map(|team| self.shift_for(date, team).map(|shift| TeamShift { team, shift }))
            .collect()
    }

    pub fn next_working_shift(
        &self,
        from: NaiveDate,
        team: u8,
    ) -> Result<Option<ShiftAssignment>, RosterError> {
        lookahead::next_working_shift(self, from, team)
    }

    /// Postes travaillés d'une équipe dans `[start, end]`.
    pub fn shifts_in_range(
        &self,
        team: u8,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ShiftAssignment>, RosterError> {
        let mut out = self.schedule(team, start, end)?;
        out.retain(|a| a.shift.is_working());
        Ok(out)
    }

    pub fn transfers_between(
        &self,
        team_a: u8,
        team_b: u8,
        from: NaiveDate,
        window: TransferWindow,
    ) -> Result<Vec<TransferEvent>, RosterError> {
        transfers::transfers_between(self, team_a, team_b, from, window)
    }

    pub fn transfers_for_days(
        &self,
        team_a: u8,
        team_b: u8,
        from: NaiveDate,
        days: u32,
    ) -> Result<Vec<TransferEvent>, RosterError> {
        self.transfers_between(team_a, team_b, from, TransferWindow::Days(days))
    }

    pub fn transfers_until(
        &self,
        team_a: u8,
        team_b: u8,
        from: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TransferEvent>, RosterError> {
        self.transfers_between(team_a, team_b, from, TransferWindow::Until(until))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = RosterConfig {
            reference_team: 7,
            ..RosterConfig::default()
        };
        assert!(Rotation::new(cfg).is_err());
    }

    #[test]
    fn shifts_in_range_skips_off_days() {
        let r = Rotation::default();
        let week = r.shifts_in_range(1, ymd(2025, 1, 6), ymd(2025, 1, 12)).unwrap();
        let codes: Vec<&str> = week.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(
            codes,
            ["2502.1M", "2502.2M", "2502.3E", "2502.4E", "2502.4N", "2502.5N"]
        );
    }

    #[test]
    fn schedule_rejects_reversed_range() {
        let r = Rotation::default();
        let err = r.schedule(1, ymd(2025, 1, 7), ymd(2025, 1, 6)).unwrap_err();
        assert!(matches!(err, RosterError::InvalidRange { .. }));
    }

    #[test]
    fn teams_on_covers_each_working_shift_once() {
        let r = Rotation::default();
        let day = r.teams_on(ymd(2025, 1, 10)).unwrap();
        assert_eq!(day.len(), 5);
        for kind in [ShiftKind::Morning, ShiftKind::Evening, ShiftKind::Night] {
            assert_eq!(day.iter().filter(|t| t.shift == kind).count(), 1);
        }
        assert_eq!(day.iter().filter(|t| t.shift == ShiftKind::Off).count(), 2);
    }
}
