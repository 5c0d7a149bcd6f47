use crate::scheduler::SchedError;
use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Type de poste dans la journée (ensemble fermé).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShiftType {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Evening => "Evening",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftType::Morning),
            "afternoon" => Ok(ShiftType::Afternoon),
            "evening" => Ok(ShiftType::Evening),
            _ => Err(SchedError::InvalidInput("unknown shift type")),
        }
    }
}

/// Jour de la semaine, ordre calendaire fixe (lundi d'abord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(raw))
            .ok_or(SchedError::InvalidInput("unknown day"))
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

/// Trois préférences distinctes, classées de la 1re à la 3e.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<ShiftType>", into = "Vec<ShiftType>"))]
pub struct Preferences([ShiftType; 3]);

impl Preferences {
    /// Valide le nombre (exactement 3) et l'unicité des préférences.
    pub fn new(prefs: &[ShiftType]) -> Result<Self, SchedError> {
        let ranked: [ShiftType; 3] = prefs
            .try_into()
            .map_err(|_| SchedError::InvalidInput("exactly three shift preferences are required"))?;
        if ranked[0] == ranked[1] || ranked[0] == ranked[2] || ranked[1] == ranked[2] {
            return Err(SchedError::InvalidInput("shift preferences must be distinct"));
        }
        Ok(Self(ranked))
    }

    pub fn ranked(&self) -> [ShiftType; 3] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = ShiftType> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<ShiftType>> for Preferences {
    type Error = SchedError;

    fn try_from(v: Vec<ShiftType>) -> Result<Self, Self::Error> {
        Preferences::new(&v)
    }
}

impl From<Preferences> for Vec<ShiftType> {
    fn from(p: Preferences) -> Self {
        p.0.to_vec()
    }
}

/// Employé : nom unique + préférences classées
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    pub name: String,
    pub preferences: Preferences,
}

impl Employee {
    /// Crée un employé ; le nom est nettoyé des espaces de bord.
    pub fn new(name: &str, preferences: &[ShiftType]) -> Result<Self, SchedError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchedError::InvalidInput("employee name cannot be empty"));
        }
        Ok(Self {
            name: name.to_owned(),
            preferences: Preferences::new(preferences)?,
        })
    }
}

/// Registre des employés, dans l'ordre d'insertion.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Ajoute ou remplace ; un nom déjà connu garde sa position d'origine.
    pub fn upsert(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.name == employee.name) {
            Some(existing) => *existing = employee,
            None => self.employees.push(employee),
        }
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Planning d'une semaine : jour → poste → employés affectés.
///
/// Les 21 créneaux sont toujours présents, éventuellement vides.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SlotMap", into = "SlotMap"))]
pub struct WeeklySchedule {
    slots: SlotMap,
}

type SlotMap = BTreeMap<Day, BTreeMap<ShiftType, Vec<String>>>;

/// Part d'une grille vide : un jour ou un poste absent reste un créneau vide.
impl From<SlotMap> for WeeklySchedule {
    fn from(parsed: SlotMap) -> Self {
        let mut schedule = Self::empty();
        for (day, shifts) in parsed {
            for (shift, names) in shifts {
                for name in names {
                    schedule.assign(day, shift, &name);
                }
            }
        }
        schedule
    }
}

impl From<WeeklySchedule> for SlotMap {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.slots
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl WeeklySchedule {
    pub fn empty() -> Self {
        let slots = Day::ALL
            .into_iter()
            .map(|day| {
                let shifts = ShiftType::ALL.into_iter().map(|s| (s, Vec::new())).collect();
                (day, shifts)
            })
            .collect();
        Self { slots }
    }

    /// Employés affectés au créneau, dans l'ordre d'affectation.
    pub fn slot(&self, day: Day, shift: ShiftType) -> &[String] {
        self.slots
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ajoute sans contrôle de capacité : c'est au moteur de vérifier avant.
    pub fn assign(&mut self, day: Day, shift: ShiftType, name: &str) {
        self.slots
            .entry(day)
            .or_default()
            .entry(shift)
            .or_default()
            .push(name.to_owned());
    }

    /// Poste occupé par `name` ce jour-là, s'il y en a un.
    pub fn shift_of(&self, day: Day, name: &str) -> Option<ShiftType> {
        self.slots.get(&day).and_then(|shifts| {
            shifts
                .iter()
                .find(|(_, names)| names.iter().any(|n| n == name))
                .map(|(shift, _)| *shift)
        })
    }

    pub fn is_assigned_on(&self, day: Day, name: &str) -> bool {
        self.shift_of(day, name).is_some()
    }

    /// Nombre total de postes attribués à `name` sur la semaine.
    pub fn shifts_count(&self, name: &str) -> usize {
        self.slots
            .values()
            .flat_map(|shifts| shifts.values())
            .map(|names| names.iter().filter(|n| *n == name).count())
            .sum()
    }

    /// Parcourt les créneaux dans l'ordre (lundi matin d'abord).
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftType, &[String])> + '_ {
        self.slots.iter().flat_map(|(day, shifts)| {
            shifts
                .iter()
                .map(move |(shift, names)| (*day, *shift, names.as_slice()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, _, names)| names.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(" EVENING ".parse::<ShiftType>(), Ok(ShiftType::Evening));
        assert_eq!("sunday".parse::<Day>(), Ok(Day::Sunday));
        assert!("night".parse::<ShiftType>().is_err());
        assert!("lundi".parse::<Day>().is_err());
    }

    #[test]
    fn days_follow_chrono_weekdays() {
        assert_eq!(Day::from(Weekday::Mon), Day::ALL[0]);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn partial_slot_map_still_yields_full_grid() {
        let mut parsed = SlotMap::new();
        parsed
            .entry(Day::Wednesday)
            .or_default()
            .insert(ShiftType::Evening, vec!["ana".to_string()]);
        let s = WeeklySchedule::from(parsed);
        assert_eq!(s.iter().count(), 21);
        assert_eq!(s.slot(Day::Wednesday, ShiftType::Evening), ["ana"]);
    }

    #[test]
    fn schedule_lookups() {
        let mut s = WeeklySchedule::empty();
        s.assign(Day::Tuesday, ShiftType::Afternoon, "ana");
        s.assign(Day::Friday, ShiftType::Morning, "ana");
        assert_eq!(s.shift_of(Day::Tuesday, "ana"), Some(ShiftType::Afternoon));
        assert_eq!(s.shift_of(Day::Monday, "ana"), None);
        assert_eq!(s.shifts_count("ana"), 2);
        assert!(!s.is_empty());
    }
}
