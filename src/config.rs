use crate::model::ShiftKind;
use crate::rotation::RosterError;
use chrono::NaiveDate;
use std::env;

pub const DEFAULT_CYCLE_LENGTH: u32 = 10;
pub const DEFAULT_TEAMS_COUNT: u8 = 5;
pub const DEFAULT_TEAM_OFFSET_DAYS: u32 = 2;
pub const DEFAULT_REFERENCE_TEAM: u8 = 1;

pub const ENV_REFERENCE_DATE: &str = "CINQ_HUIT_REFERENCE_DATE";
pub const ENV_REFERENCE_TEAM: &str = "CINQ_HUIT_REFERENCE_TEAM";

/// Largeur (en jours) de chaque bande du cycle, dans l'ordre matin, après-midi, nuit, repos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftBands {
    pub morning: u32,
    pub evening: u32,
    pub night: u32,
    pub off: u32,
}

impl Default for ShiftBands {
    fn default() -> Self {
        Self {
            morning: 2,
            evening: 2,
            night: 2,
            off: 4,
        }
    }
}

impl ShiftBands {
    /// Longueur couverte par les quatre bandes, `None` en cas de débordement.
    pub fn total(&self) -> Option<u32> {
        self.working()?.checked_add(self.off)
    }

    pub fn working(&self) -> Option<u32> {
        self.morning
            .checked_add(self.evening)?
            .checked_add(self.night)
    }

    /// Poste correspondant à une position `[0, total)` dans le cycle.
    pub fn shift_at(&self, pos: u32) -> ShiftKind {
        let evening_end = self.morning.saturating_add(self.evening);
        if pos < self.morning {
            ShiftKind::Morning
        } else if pos < evening_end {
            ShiftKind::Evening
        } else if pos < evening_end.saturating_add(self.night) {
            ShiftKind::Night
        } else {
            ShiftKind::Off
        }
    }
}

/// Paramètres du roulement, figés au démarrage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterConfig {
    pub reference_date: NaiveDate,
    pub reference_team: u8,
    pub cycle_length: u32,
    pub teams_count: u8,
    pub team_offset_days: u32,
    pub bands: ShiftBands,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            reference_team: DEFAULT_REFERENCE_TEAM,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            teams_count: DEFAULT_TEAMS_COUNT,
            team_offset_days: DEFAULT_TEAM_OFFSET_DAYS,
            bands: ShiftBands::default(),
        }
    }
}

fn default_reference_date() -> NaiveDate {
    // 2025-01-06 : lundi où l'équipe 1 commence son premier matin
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.teams_count == 0 {
            return Err(RosterError::InvalidConfig("teams_count must be > 0".into()));
        }
        if self.reference_team == 0 || self.reference_team > self.teams_count {
            return Err(RosterError::InvalidConfig(format!(
                "reference_team must be in [1, {}], got {}",
                self.teams_count, self.reference_team
            )));
        }
        if self.cycle_length == 0 {
            return Err(RosterError::InvalidConfig("cycle_length must be > 0".into()));
        }
        let Some(total) = self.bands.total() else {
            return Err(RosterError::InvalidConfig(
                "shift band widths overflow".into(),
            ));
        };
        if total != self.cycle_length {
            return Err(RosterError::InvalidConfig(format!(
                "shift bands cover {total} days but cycle_length is {}",
                self.cycle_length
            )));
        }
        if self.bands.working() == Some(0) {
            return Err(RosterError::InvalidConfig(
                "at least one working band must be non-empty".into(),
            ));
        }
        Ok(())
    }

    /// Nombre de jours à parcourir pour trouver un poste travaillé.
    ///
    /// Le repos le plus long dure `bands.off` jours, toujours strictement
    /// inférieur à la longueur du cycle tant qu'une bande travaillée existe.
    pub fn lookahead_days(&self) -> u32 {
        self.cycle_length.max(self.bands.off.saturating_add(1))
    }

    /// Défauts surchargés par `CINQ_HUIT_REFERENCE_DATE` / `CINQ_HUIT_REFERENCE_TEAM`.
    /// Les valeurs absentes ou invalides retombent sur le défaut.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(
            env::var(ENV_REFERENCE_DATE).ok().as_deref(),
            env::var(ENV_REFERENCE_TEAM).ok().as_deref(),
        );
        config
    }

    fn apply_overrides(&mut self, date: Option<&str>, team: Option<&str>) {
        if let Some(raw) = date {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(d) => self.reference_date = d,
                Err(err) => tracing::warn!(
                    value = raw,
                    %err,
                    "invalid {ENV_REFERENCE_DATE}, keeping {}",
                    self.reference_date
                ),
            }
        }
        if let Some(raw) = team {
            match raw.trim().parse::<u8>() {
                Ok(t) if (1..=self.teams_count).contains(&t) => self.reference_team = t,
                _ => tracing::warn!(
                    value = raw,
                    "invalid {ENV_REFERENCE_TEAM}, keeping team {}",
                    self.reference_team
                ),
            }
        }
    }

    /// Charge un fichier JSON (champs absents = défauts) puis valide.
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let data =
            std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}
