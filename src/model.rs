use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Poste du roulement. Catalogue figé : les métadonnées sont des constantes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftKind {
    Morning,
    Evening,
    Night,
    Off,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Morning,
        ShiftKind::Evening,
        ShiftKind::Night,
        ShiftKind::Off,
    ];

    /// Lettre utilisée dans les codes de poste.
    pub const fn letter(self) -> char {
        match self {
            ShiftKind::Morning => 'M',
            ShiftKind::Evening => 'E',
            ShiftKind::Night => 'N',
            ShiftKind::Off => 'O',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Evening => "Evening",
            ShiftKind::Night => "Night",
            ShiftKind::Off => "Off",
        }
    }

    pub const fn hours_label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "07:00-15:00",
            ShiftKind::Evening => "15:00-23:00",
            ShiftKind::Night => "23:00-07:00",
            ShiftKind::Off => "-",
        }
    }

    /// Heures de début/fin, `None` pour le repos.
    pub const fn hours(self) -> Option<(u32, u32)> {
        match self {
            ShiftKind::Morning => Some((7, 15)),
            ShiftKind::Evening => Some((15, 23)),
            ShiftKind::Night => Some((23, 7)),
            ShiftKind::Off => None,
        }
    }

    pub const fn is_working(self) -> bool {
        !matches!(self, ShiftKind::Off)
    }

    /// Rang dans la journée (matin 0, après-midi 1, nuit 2). Le repos n'en a pas.
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            ShiftKind::Morning => Some(0),
            ShiftKind::Evening => Some(1),
            ShiftKind::Night => Some(2),
            ShiftKind::Off => None,
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.letter() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Résultat calculé de (date, équipe). Jamais stocké.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftAssignment {
    pub date: NaiveDate,
    pub shift: ShiftKind,
    pub code: String,
}

impl ShiftAssignment {
    /// Début/fin du poste en heure locale.
    ///
    /// Une nuit affectée au jour `d` commence à 23:00 la veille et se termine
    /// à 07:00 le jour `d`, cohérent avec son code qui porte la date de la veille.
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start_h, end_h) = self.shift.hours()?;
        let start_time = NaiveTime::from_hms_opt(start_h, 0, 0)?;
        let end_time = NaiveTime::from_hms_opt(end_h, 0, 0)?;
        if end_time <= start_time {
            let start_date = self.date.checked_sub_days(Days::new(1))?;
            Some((
                start_date.and_time(start_time),
                self.date.and_time(end_time),
            ))
        } else {
            Some((self.date.and_time(start_time), self.date.and_time(end_time)))
        }
    }
}

/// Poste d'une équipe pour un jour donné (vue « qui travaille aujourd'hui »).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamShift {
    pub team: u8,
    pub shift: ShiftKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransferKind {
    /// Le poste de l'équipe A est suivi par celui de l'équipe B.
    Handover,
    /// Le poste de l'équipe B précède celui de l'équipe A.
    Takeover,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferKind::Handover => f.write_str("handover"),
            TransferKind::Takeover => f.write_str("takeover"),
        }
    }
}

/// Relève entre deux équipes un jour donné.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferEvent {
    pub date: NaiveDate,
    pub team_a_shift: ShiftKind,
    pub team_b_shift: ShiftKind,
    pub team_a_code: String,
    pub team_b_code: String,
    pub kind: TransferKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(y: i32, m: u32, d: u32, shift: ShiftKind) -> ShiftAssignment {
        ShiftAssignment {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            shift,
            code: String::new(),
        }
    }

    #[test]
    fn letters_round_trip() {
        for kind in ShiftKind::ALL {
            assert_eq!(ShiftKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(ShiftKind::from_letter('n'), Some(ShiftKind::Night));
        assert_eq!(ShiftKind::from_letter('X'), None);
    }

    #[test]
    fn only_off_has_no_hours() {
        assert!(ShiftKind::Off.hours().is_none());
        assert!(ShiftKind::Off.ordinal().is_none());
        assert!(!ShiftKind::Off.is_working());
        assert_eq!(ShiftKind::Night.hours(), Some((23, 7)));
    }

    #[test]
    fn night_span_starts_the_day_before() {
        let (start, end) = assignment(2025, 1, 10, ShiftKind::Night).span().unwrap();
        assert_eq!(start.to_string(), "2025-01-09 23:00:00");
        assert_eq!(end.to_string(), "2025-01-10 07:00:00");
    }

    #[test]
    fn day_spans_stay_on_date() {
        let (start, end) = assignment(2025, 1, 8, ShiftKind::Evening).span().unwrap();
        assert_eq!(start.to_string(), "2025-01-08 15:00:00");
        assert_eq!(end.to_string(), "2025-01-08 23:00:00");
        assert!(assignment(2025, 1, 12, ShiftKind::Off).span().is_none());
    }
}
