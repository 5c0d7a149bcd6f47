use super::{workload::WorkloadTracker, AssignOptions};
use crate::model::{Day, Employee, ShiftType, WeeklySchedule};

/// Affectation gloutonne par préférences : jours dans l'ordre, employés dans
/// l'ordre d'inscription, premier poste préféré encore disponible.
///
/// Pas de retour arrière : un employé inscrit tôt peut occuper, sur sa 3e
/// préférence, la place qu'un suivant aurait voulue en 1re.
pub(super) fn assign_by_preference(
    employees: &[Employee],
    opts: AssignOptions,
    workload: &mut WorkloadTracker,
) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::empty();
    workload.reset(employees.iter().map(|e| e.name.as_str()));

    for day in Day::ALL {
        for employee in employees {
            let done = workload.get(&employee.name).unwrap_or(0);
            if done >= opts.weekly_cap {
                #[cfg(feature = "logging")]
                tracing::trace!(%day, employee = %employee.name, "weekly cap reached");
                continue;
            }

            let chosen = employee
                .preferences
                .iter()
                .find(|shift| slot_open(&schedule, day, *shift, &employee.name, opts));

            match chosen {
                Some(shift) => {
                    schedule.assign(day, shift, &employee.name);
                    workload.increment(&employee.name);
                    #[cfg(feature = "logging")]
                    tracing::debug!(%day, %shift, employee = %employee.name, "shift assigned");
                }
                None => {
                    // aucun poste préféré libre : pas de poste ce jour-là
                    #[cfg(feature = "logging")]
                    tracing::debug!(%day, employee = %employee.name, "no preferred shift left");
                }
            }
        }
    }

    schedule
}

fn slot_open(
    schedule: &WeeklySchedule,
    day: Day,
    shift: ShiftType,
    name: &str,
    opts: AssignOptions,
) -> bool {
    schedule.slot(day, shift).len() < opts.slot_capacity && !schedule.is_assigned_on(day, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShiftType::{Afternoon, Evening, Morning};

    fn emp(name: &str, prefs: [ShiftType; 3]) -> Employee {
        Employee::new(name, &prefs).unwrap()
    }

    #[test]
    fn third_employee_falls_back_to_second_preference() {
        let employees = vec![
            emp("Alice", [Morning, Afternoon, Evening]),
            emp("Bob", [Morning, Evening, Afternoon]),
            emp("Carol", [Morning, Afternoon, Evening]),
        ];
        let mut w = WorkloadTracker::default();
        let s = assign_by_preference(&employees, AssignOptions::default(), &mut w);

        assert_eq!(s.slot(Day::Monday, Morning), ["Alice", "Bob"]);
        assert_eq!(s.slot(Day::Monday, Afternoon), ["Carol"]);
        assert!(s.slot(Day::Monday, Evening).is_empty());
    }

    #[test]
    fn weekly_cap_leaves_weekend_empty_for_single_employee() {
        let employees = vec![emp("Solo", [Evening, Morning, Afternoon])];
        let mut w = WorkloadTracker::default();
        let s = assign_by_preference(&employees, AssignOptions::default(), &mut w);

        for day in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            assert_eq!(s.slot(day, Evening), ["Solo"]);
        }
        assert!(!s.is_assigned_on(Day::Saturday, "Solo"));
        assert!(!s.is_assigned_on(Day::Sunday, "Solo"));
        assert_eq!(w.get("Solo"), Some(5));
    }

    #[test]
    fn seventh_employee_gets_nothing_when_day_is_full() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let employees: Vec<Employee> = names
            .iter()
            .map(|n| emp(n, [Morning, Afternoon, Evening]))
            .collect();
        let mut w = WorkloadTracker::default();
        let s = assign_by_preference(&employees, AssignOptions::default(), &mut w);

        assert_eq!(s.slot(Day::Monday, Morning), ["A", "B"]);
        assert_eq!(s.slot(Day::Monday, Afternoon), ["C", "D"]);
        assert_eq!(s.slot(Day::Monday, Evening), ["E", "F"]);
        assert!(!s.is_assigned_on(Day::Monday, "G"));
        // A..F ont atteint le plafond vendredi soir, seul G reste
        assert_eq!(s.slot(Day::Saturday, Morning), ["G"]);
        assert_eq!(w.get("G"), Some(2));
    }

    #[test]
    fn custom_capacity_is_honoured() {
        let employees = vec![
            emp("A", [Morning, Afternoon, Evening]),
            emp("B", [Morning, Afternoon, Evening]),
        ];
        let opts = AssignOptions {
            slot_capacity: 1,
            ..AssignOptions::default()
        };
        let mut w = WorkloadTracker::default();
        let s = assign_by_preference(&employees, opts, &mut w);
        assert_eq!(s.slot(Day::Monday, Morning), ["A"]);
        assert_eq!(s.slot(Day::Monday, Afternoon), ["B"]);
    }
}
