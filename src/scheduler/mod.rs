mod assignment;
mod conflicts;
mod types;
mod workload;

pub use types::{
    AssignOptions, Coverage, Gap, SchedError, Violation, DEFAULT_SLOT_CAPACITY,
    DEFAULT_WEEKLY_CAP,
};

use crate::model::{Employee, Roster, ShiftType, WeeklySchedule};
use workload::WorkloadTracker;

/// Scheduler : possède le registre, les compteurs et le dernier planning produit
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
    workload: WorkloadTracker,
    opts: AssignOptions,
    last: Option<WeeklySchedule>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_options(AssignOptions::default())
    }

    pub fn with_options(opts: AssignOptions) -> Self {
        Self {
            roster: Roster::default(),
            workload: WorkloadTracker::default(),
            opts,
            last: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn options(&self) -> AssignOptions {
        self.opts
    }

    /// Inscrit (ou remplace) un employé ; son compteur repart à zéro.
    pub fn register(&mut self, name: &str, preferences: &[ShiftType]) -> Result<(), SchedError> {
        let employee = Employee::new(name, preferences)?;
        self.workload.set_zero(&employee.name);
        self.roster.upsert(employee);
        Ok(())
    }

    pub fn register_employee(
        &mut self,
        name: &str,
        first: ShiftType,
        second: ShiftType,
        third: ShiftType,
    ) -> Result<(), SchedError> {
        self.register(name, &[first, second, third])
    }

    /// Employés dans l'ordre d'inscription.
    pub fn list_employees(&self) -> Vec<(&str, [ShiftType; 3])> {
        self.roster
            .employees
            .iter()
            .map(|e| (e.name.as_str(), e.preferences.ranked()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Employee> {
        self.roster.find_by_name(name.trim())
    }

    /// Régénère entièrement le planning de la semaine.
    pub fn generate_schedule(&mut self) -> &WeeklySchedule {
        let schedule =
            assignment::assign_by_preference(&self.roster.employees, self.opts, &mut self.workload);
        #[cfg(feature = "logging")]
        tracing::info!(employees = self.roster.len(), "schedule generated");
        self.last.insert(schedule)
    }

    pub fn last_schedule(&self) -> Option<&WeeklySchedule> {
        self.last.as_ref()
    }

    /// Postes attribués à `name` lors de la dernière génération.
    pub fn workload(&self, name: &str) -> Option<u32> {
        self.workload.get(name)
    }

    pub fn detect_violations(&self, schedule: &WeeklySchedule) -> Vec<Violation> {
        conflicts::detect_violations(schedule, self.opts)
    }

    pub fn coverage(&self, schedule: &WeeklySchedule) -> Coverage {
        conflicts::coverage(schedule, self.roster.len(), self.opts)
    }
}
