use super::{RosterError, Rotation};
use crate::calendar;
use crate::model::ShiftKind;
use chrono::NaiveDate;

pub(super) fn cycle_position(
    rotation: &Rotation,
    date: NaiveDate,
    team: u8,
) -> Result<u32, RosterError> {
    rotation.check_team(team)?;
    let cfg = rotation.config();

    let days = calendar::days_between(cfg.reference_date, date);
    // chaque équipe démarre son cycle `team_offset_days` après la précédente
    let team_offset =
        (i64::from(team) - i64::from(cfg.reference_team)) * i64::from(cfg.team_offset_days);
    let adjusted = days - team_offset;

    // rem_euclid : toujours dans [0, cycle_length), y compris avant la date de référence
    let pos = adjusted.rem_euclid(i64::from(cfg.cycle_length));
    u32::try_from(pos).map_err(|_| RosterError::DateOverflow)
}

pub(super) fn shift_for(
    rotation: &Rotation,
    date: NaiveDate,
    team: u8,
) -> Result<ShiftKind, RosterError> {
    let pos = cycle_position(rotation, date, team)?;
    Ok(rotation.config().bands.shift_at(pos))
}
