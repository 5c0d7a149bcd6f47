use super::{AssignOptions, Coverage, Gap, Violation};
use crate::model::{Day, ShiftType, WeeklySchedule};
use std::collections::BTreeMap;

pub(super) fn detect_violations(schedule: &WeeklySchedule, opts: AssignOptions) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut totals: BTreeMap<&str, u32> = BTreeMap::new();

    for day in Day::ALL {
        let mut seen: Vec<&str> = Vec::new();
        let mut reported: Vec<&str> = Vec::new();

        for shift in ShiftType::ALL {
            let names = schedule.slot(day, shift);
            if names.len() > opts.slot_capacity {
                out.push(Violation::OverCapacity {
                    day,
                    shift,
                    count: names.len(),
                });
            }

            for name in names {
                *totals.entry(name.as_str()).or_insert(0) += 1;
                if seen.contains(&name.as_str()) {
                    if !reported.contains(&name.as_str()) {
                        out.push(Violation::DoubleBooking {
                            day,
                            employee: name.clone(),
                        });
                        reported.push(name);
                    }
                } else {
                    seen.push(name);
                }
            }
        }
    }

    for (employee, count) in totals {
        if count > opts.weekly_cap {
            out.push(Violation::WeeklyCapExceeded {
                employee: employee.to_owned(),
                count,
            });
        }
    }

    out
}

pub(super) fn coverage(schedule: &WeeklySchedule, staff: usize, opts: AssignOptions) -> Coverage {
    let gaps = Day::ALL
        .into_iter()
        .flat_map(|day| ShiftType::ALL.into_iter().map(move |shift| (day, shift)))
        .filter_map(|(day, shift)| {
            let held = schedule.slot(day, shift).len();
            (held < opts.slot_capacity).then(|| Gap {
                day,
                shift,
                missing: opts.slot_capacity - held,
            })
        })
        .collect();

    Coverage {
        gaps,
        staff,
        min_staff_required: min_staff_required(opts),
    }
}

/// Effectif minimal pour remplir tous les créneaux sans dépasser le plafond.
fn min_staff_required(opts: AssignOptions) -> usize {
    let seats = Day::ALL.len() * ShiftType::ALL.len() * opts.slot_capacity;
    let cap = opts.weekly_cap.max(1) as usize;
    seats.div_ceil(cap)
}
