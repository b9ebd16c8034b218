use super::{RosterError, Rotation};
use crate::model::ShiftAssignment;
use chrono::{Days, NaiveDate};

pub(super) fn next_working_shift(
    rotation: &Rotation,
    from: NaiveDate,
    team: u8,
) -> Result<Option<ShiftAssignment>, RosterError> {
    rotation.check_team(team)?;
    let horizon = rotation.config().lookahead_days();

    for offset in 1..=u64::from(horizon) {
        let date = from
            .checked_add_days(Days::new(offset))
            .ok_or(RosterError::DateOverflow)?;
        let assignment = rotation.assignment(date, team)?;
        if assignment.shift.is_working() {
            return Ok(Some(assignment));
        }
    }

    tracing::debug!(team, %from, horizon, "no working shift within lookahead");
    Ok(None)
}
