#![forbid(unsafe_code)]
//! Roulement : génération de planning hebdomadaire à partir de préférences.
//!
//! - Trois postes par jour (matin, après-midi, soir), sept jours.
//! - Affectation gloutonne déterministe : ordre des jours, puis ordre d'inscription.
//! - Capacité par créneau et plafond hebdomadaire par employé.
//! - Import CSV / export JSON et CSV (feature `serde`) ; rendu hors de la lib.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;

pub use model::{Day, Employee, Preferences, Roster, ShiftType, WeeklySchedule};
pub use render::{ScheduleRenderer, TextGrid};
pub use scheduler::{
    AssignOptions, Coverage, Gap, SchedError, Scheduler, Violation, DEFAULT_SLOT_CAPACITY,
    DEFAULT_WEEKLY_CAP,
};
