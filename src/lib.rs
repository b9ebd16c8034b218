#![forbid(unsafe_code)]
//! Cinq-huit : calcul des postes d'un roulement continu à 5 équipes.
//!
//! - Cycle de 10 jours : 2 matins, 2 après-midi, 2 nuits, 4 repos ; chaque équipe décalée de 2 jours.
//! - Codes de poste compacts `YYWW.DX` (semaines ISO), une nuit portant la date de la veille.
//! - Recherche du prochain poste travaillé, détection des relèves entre deux équipes.
//! - Fonctions pures sur `NaiveDate` (heure locale) ; affichage et fichiers en dehors du cœur.

pub mod calendar;
pub mod config;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod rotation;
pub mod status;

pub use calendar::{date_code, days_between, normalize_to_day, week_range, WeekRange};
pub use config::{RosterConfig, ShiftBands};
#[cfg(feature = "serde")]
pub use io::TeamSchedule;
pub use model::{ShiftAssignment, ShiftKind, TeamShift, TransferEvent, TransferKind};
pub use rotation::{current_shift_day, RosterError, Rotation, TransferWindow};
pub use status::{prepare_status, Status, StatusRenderer, StatusReport, TextStatus};
