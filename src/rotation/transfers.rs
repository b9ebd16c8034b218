use super::{RosterError, Rotation, TransferWindow};
use crate::calendar;
use crate::model::{ShiftKind, TransferEvent, TransferKind};
use chrono::{Days, NaiveDate};

pub(super) fn transfers_between(
    rotation: &Rotation,
    team_a: u8,
    team_b: u8,
    from: NaiveDate,
    window: TransferWindow,
) -> Result<Vec<TransferEvent>, RosterError> {
    rotation.check_team(team_a)?;
    rotation.check_team(team_b)?;

    let until = match window {
        TransferWindow::Days(0) => return Ok(Vec::new()),
        TransferWindow::Days(n) => from
            .checked_add_days(Days::new(u64::from(n) - 1))
            .ok_or(RosterError::DateOverflow)?,
        TransferWindow::Until(end) if end < from => {
            return Err(RosterError::InvalidRange { start: from, end })
        }
        TransferWindow::Until(end) => end,
    };

    let mut out = Vec::new();
    for date in calendar::days_in_range(from, until) {
        let a = rotation.shift_for(date, team_a)?;
        let b = rotation.shift_for(date, team_b)?;
        let Some(kind) = transfer_kind(a, b) else {
            continue;
        };
        out.push(TransferEvent {
            date,
            team_a_shift: a,
            team_b_shift: b,
            team_a_code: rotation.shift_code(date, team_a)?,
            team_b_code: rotation.shift_code(date, team_b)?,
            kind,
        });
    }

    tracing::debug!(team_a, team_b, %from, %until, found = out.len(), "transfer scan");
    Ok(out)
}

/// Matin → après-midi → nuit → matin : relève quand un poste suit directement l'autre.
fn transfer_kind(a: ShiftKind, b: ShiftKind) -> Option<TransferKind> {
    let (oa, ob) = (a.ordinal()?, b.ordinal()?);
    if (oa + 1) % 3 == ob {
        Some(TransferKind::Handover)
    } else if (ob + 1) % 3 == oa {
        Some(TransferKind::Takeover)
    } else {
        None
    }
}
