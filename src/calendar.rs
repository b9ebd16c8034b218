use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Fenêtre lundi → dimanche (bornes incluses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        days_in_range(self.start, self.end)
    }
}

/// Tronque un instant (heure locale de l'appelant) au jour.
pub fn normalize_to_day(at: NaiveDateTime) -> NaiveDate {
    at.date()
}

/// Écart signé en jours entiers, positif quand `b` est après `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Semaine ISO contenant `date`, ancrée sur le lundi quel que soit le jour d'entrée.
///
/// `None` uniquement aux extrémités du calendrier représentable.
pub fn week_range(date: NaiveDate) -> Option<WeekRange> {
    let back = u64::from(date.weekday().num_days_from_monday());
    let start = date.checked_sub_days(Days::new(back))?;
    let end = start.checked_add_days(Days::new(6))?;
    Some(WeekRange { start, end })
}

/// Code compact `YYWW.D` : année ISO sur 2 chiffres, semaine ISO, jour ISO (lundi = 1).
///
/// L'année est celle de la numérotation ISO, pas l'année civile : le lundi
/// 2024-12-30 donne `2501.1`, et un dimanche reste dans la semaine de son lundi.
pub fn date_code(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!(
        "{:02}{:02}.{}",
        iso.year().rem_euclid(100),
        iso.week(),
        date.weekday().number_from_monday()
    )
}

/// Itère chaque jour de `[start, end]`. Vide si `end < start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
