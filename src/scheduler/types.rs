use crate::model::{Day, ShiftType};
use thiserror::Error;

/// Nombre maximal d'employés par créneau (jour, poste).
pub const DEFAULT_SLOT_CAPACITY: usize = 2;
/// Nombre maximal de postes par employé et par semaine.
pub const DEFAULT_WEEKLY_CAP: u32 = 5;

/// Options d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    pub slot_capacity: usize,
    pub weekly_cap: u32,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            weekly_cap: DEFAULT_WEEKLY_CAP,
        }
    }
}

/// Règle enfreinte par un planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    OverCapacity { day: Day, shift: ShiftType, count: usize },
    DoubleBooking { day: Day, employee: String },
    WeeklyCapExceeded { employee: String, count: u32 },
}

impl Violation {
    pub fn code(&self) -> &'static str {
        match self {
            Violation::OverCapacity { .. } => "capacity",
            Violation::DoubleBooking { .. } => "double",
            Violation::WeeklyCapExceeded { .. } => "weekly_cap",
        }
    }
}

/// Créneau sous-doté après génération.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub day: Day,
    pub shift: ShiftType,
    pub missing: usize,
}

/// Bilan de couverture d'un planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub gaps: Vec<Gap>,
    pub staff: usize,
    pub min_staff_required: usize,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn understaffed(&self) -> bool {
        self.staff < self.min_staff_required
    }

    pub fn missing_seats(&self) -> usize {
        self.gaps.iter().map(|g| g.missing).sum()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
