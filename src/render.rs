use crate::model::{Day, ShiftType, WeeklySchedule};
use std::fmt::Write;

/// Permet de customiser le rendu du planning (texte, HTML, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &WeeklySchedule) -> String;
}

/// Grille texte : une ligne par jour, les trois postes séparés par `|`.
#[derive(Debug, Clone, Copy)]
pub struct TextGrid {
    pub placeholder: &'static str,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self { placeholder: "None" }
    }
}

impl TextGrid {
    /// Ligne d'un seul jour, sans retour à la ligne final.
    pub fn render_day(&self, schedule: &WeeklySchedule, day: Day) -> String {
        let cells: Vec<String> = ShiftType::ALL
            .into_iter()
            .map(|shift| {
                let names = schedule.slot(day, shift);
                let who = if names.is_empty() {
                    self.placeholder.to_string()
                } else {
                    names.join(", ")
                };
                format!("{shift}: {who}")
            })
            .collect();
        format!("{day}: {}", cells.join(" | "))
    }
}

impl ScheduleRenderer for TextGrid {
    fn render(&self, schedule: &WeeklySchedule) -> String {
        let mut out = String::new();
        for day in Day::ALL {
            // écrire dans une String ne peut pas échouer
            let _ = writeln!(out, "{}", self.render_day(schedule, day));
        }
        out
    }
}
