use crate::calendar;
use crate::model::ShiftAssignment;
use crate::rotation::{current_shift_day, Rotation};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// État « aujourd'hui » d'une équipe, calculé à partir d'un seul instant capturé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub team: u8,
    pub now: NaiveDateTime,
    pub shift_day: NaiveDate,
    pub current: ShiftAssignment,
    pub next: Option<ShiftAssignment>,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub status: Status,
    pub content: String,
}

/// Permet de customiser le rendu (terminal, badge, notification...).
pub trait StatusRenderer {
    fn render(&self, status: &Status) -> String;
}

/// Rendu texte brut, trois lignes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextStatus;

impl StatusRenderer for TextStatus {
    fn render(&self, status: &Status) -> String {
        let current = &status.current;
        let next = match &status.next {
            Some(n) => format!("{} on {} [{}]", n.shift, n.date, n.code),
            None => "no upcoming shift found".to_string(),
        };
        format!(
            "Team {team} | shift day {day} ({day_code})\nNow:  {name} {hours} [{code}]\nNext: {next}",
            team = status.team,
            day = status.shift_day,
            day_code = calendar::date_code(status.shift_day),
            name = current.shift,
            hours = current.shift.hours_label(),
            code = current.code,
        )
    }
}

/// Construit l'état courant de `team` pour l'instant `now`.
pub fn prepare_status(
    rotation: &Rotation,
    team: u8,
    now: NaiveDateTime,
    renderer: &dyn StatusRenderer,
) -> Result<StatusReport> {
    let shift_day = current_shift_day(now).context("computing shift day")?;
    let current = rotation
        .assignment(shift_day, team)
        .with_context(|| format!("computing shift of team {team}"))?;
    let next = rotation.next_working_shift(shift_day, team)?;

    let status = Status {
        team,
        now,
        shift_day,
        current,
        next,
    };
    let content = renderer.render(&status);
    Ok(StatusReport { status, content })
}
