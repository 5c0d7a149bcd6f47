use crate::model::{Employee, Roster, ShiftType, WeeklySchedule};
use crate::scheduler::{Gap, Violation};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name,pref1,pref2,pref3`
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map_or(0, |p| p.line());
        let name = rec
            .get(0)
            .with_context(|| format!("line {line}: missing name"))?;
        let prefs = (1..=3)
            .map(|i| -> anyhow::Result<ShiftType> {
                let raw = rec
                    .get(i)
                    .with_context(|| format!("line {line}: missing pref{i}"))?;
                raw.parse::<ShiftType>()
                    .with_context(|| format!("line {line}: invalid pref{i} {raw:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let employee =
            Employee::new(name, &prefs).with_context(|| format!("line {line}: invalid employee"))?;
        out.push(employee);
    }
    Ok(out)
}

/// Parse `Nom=morning,evening,afternoon` (format de `--employee`).
pub fn parse_employee_arg(raw: &str) -> anyhow::Result<Employee> {
    let Some((name, prefs)) = raw.split_once('=') else {
        bail!("expected NAME=PREF1,PREF2,PREF3, got {raw:?}");
    };
    let prefs = prefs
        .split(',')
        .map(str::parse::<ShiftType>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Employee::new(name, &prefs)?)
}

/// Export JSON du registre (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Relit un registre JSON ; les préférences repassent par la validation.
pub fn load_roster_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let roster: Roster =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(roster)
}

#[derive(Serialize)]
struct ScheduleExport<'a> {
    generated_at: DateTime<Utc>,
    schedule: &'a WeeklySchedule,
}

#[derive(Deserialize)]
struct ScheduleImport {
    schedule: WeeklySchedule,
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &WeeklySchedule,
) -> anyhow::Result<()> {
    let doc = ScheduleExport {
        generated_at: Utc::now(),
        schedule,
    };
    let s = serde_json::to_string_pretty(&doc)?;
    fs::write(path, s)?;
    Ok(())
}

/// Relit un planning exporté par [`export_schedule_json`].
pub fn load_schedule_json<P: AsRef<Path>>(path: P) -> anyhow::Result<WeeklySchedule> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: ScheduleImport =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(doc.schedule)
}

/// Export CSV du planning: header `day,shift,employees` (noms séparés par `;`)
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &WeeklySchedule,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "employees"])?;
    for (day, shift, names) in schedule.iter() {
        let joined = names.join(";");
        w.write_record([day.as_str(), shift.as_str(), joined.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Rapport de contrôle: header `kind,day,shift,employee,count`
///
/// Les créneaux sous-dotés sortent en `gap` avec le nombre de places manquantes.
pub fn export_check_csv<P: AsRef<Path>>(
    path: P,
    violations: &[Violation],
    gaps: &[Gap],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["kind", "day", "shift", "employee", "count"])?;
    for v in violations {
        let (day, shift, employee, count) = match v {
            Violation::OverCapacity { day, shift, count } => {
                (day.as_str(), shift.as_str(), "", count.to_string())
            }
            Violation::DoubleBooking { day, employee } => {
                (day.as_str(), "", employee.as_str(), String::new())
            }
            Violation::WeeklyCapExceeded { employee, count } => {
                ("", "", employee.as_str(), count.to_string())
            }
        };
        w.write_record([v.code(), day, shift, employee, count.as_str()])?;
    }
    for g in gaps {
        let missing = g.missing.to_string();
        w.write_record(["gap", g.day.as_str(), g.shift.as_str(), "", missing.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
