use super::{RosterError, Rotation};
use crate::calendar;
use crate::model::ShiftKind;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Heure à laquelle la nuit se termine et le « jour de poste » bascule.
pub const SHIFT_DAY_ROLLOVER_HOUR: u32 = 7;

pub(super) fn shift_code(
    rotation: &Rotation,
    date: NaiveDate,
    team: u8,
) -> Result<String, RosterError> {
    let shift = rotation.shift_for(date, team)?;
    code_for(date, shift)
}

pub(super) fn code_for(date: NaiveDate, shift: ShiftKind) -> Result<String, RosterError> {
    let code_date = match shift {
        ShiftKind::Night => date.pred_opt().ok_or(RosterError::DateOverflow)?,
        _ => date,
    };
    let mut code = calendar::date_code(code_date);
    code.push(shift.letter());
    Ok(code)
}

/// Jour de poste pour l'instant `now` : avant 07:00, c'est encore la veille.
///
/// `now` doit être capturé une fois par opération et réutilisé par l'appelant.
pub fn current_shift_day(now: NaiveDateTime) -> Result<NaiveDate, RosterError> {
    let today = calendar::normalize_to_day(now);
    if now.hour() < SHIFT_DAY_ROLLOVER_HOUR {
        today.pred_opt().ok_or(RosterError::DateOverflow)
    } else {
        Ok(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_shift_codes_use_own_date() {
        let r = Rotation::default();
        assert_eq!(r.shift_code(ymd(2025, 1, 6), 1).unwrap(), "2502.1M");
        assert_eq!(r.shift_code(ymd(2025, 1, 9), 1).unwrap(), "2502.4E");
        assert_eq!(r.shift_code(ymd(2025, 1, 12), 1).unwrap(), "2502.7O");
    }

    #[test]
    fn night_code_uses_previous_day() {
        let r = Rotation::default();
        assert_eq!(r.shift_for(ymd(2025, 1, 10), 1).unwrap(), ShiftKind::Night);
        assert_eq!(r.shift_code(ymd(2025, 1, 10), 1).unwrap(), "2502.4N");
        // nuit du lundi : code du dimanche de la semaine précédente
        assert_eq!(code_for(ymd(2025, 1, 13), ShiftKind::Night).unwrap(), "2502.7N");
    }

    #[test]
    fn night_codes_start_with_previous_date_code() {
        let r = Rotation::default();
        for d in calendar::days_in_range(ymd(2025, 1, 1), ymd(2025, 3, 1)) {
            for team in r.teams() {
                if r.shift_for(d, team).unwrap() == ShiftKind::Night {
                    let prev = calendar::date_code(d.pred_opt().unwrap());
                    assert!(r.shift_code(d, team).unwrap().starts_with(&prev));
                }
            }
        }
    }

    #[test]
    fn shift_day_rolls_over_at_seven() {
        let day = ymd(2025, 1, 10);
        let at = |h, m| day.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(current_shift_day(at(6, 59)).unwrap(), ymd(2025, 1, 9));
        assert_eq!(current_shift_day(at(0, 0)).unwrap(), ymd(2025, 1, 9));
        assert_eq!(current_shift_day(at(7, 0)).unwrap(), day);
        assert_eq!(current_shift_day(at(23, 30)).unwrap(), day);
    }
}
