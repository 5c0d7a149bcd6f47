#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{builder::RangedU64ValueParser, Parser, Subcommand};
use roulement::{
    io,
    render::{ScheduleRenderer, TextGrid},
    scheduler::{AssignOptions, Scheduler, DEFAULT_SLOT_CAPACITY, DEFAULT_WEEKLY_CAP},
    Day, Violation,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire par préférences
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Registre JSON (export de `list --out-json`), chargé en premier
    #[arg(long, global = true)]
    roster_json: Option<String>,

    /// CSV d'employés: `name,pref1,pref2,pref3`
    #[arg(long, global = true)]
    employees: Option<String>,

    /// Employé supplémentaire "Nom=morning,afternoon,evening" (répétable)
    #[arg(long = "employee", global = true)]
    extra: Vec<String>,

    /// Nombre maximal d'employés par créneau
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_SLOT_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    capacity: usize,

    /// Nombre maximal de postes par employé et par semaine
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_WEEKLY_CAP,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    weekly_cap: u32,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les employés et leurs préférences
    List {
        /// Export JSON du registre (optionnel)
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Générer et afficher le planning de la semaine
    Generate {
        /// N'afficher qu'un jour ("monday".."sunday" ou "today")
        #[arg(long)]
        day: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier un planning (généré, ou relu depuis un export JSON)
    Check {
        #[arg(long)]
        schedule: Option<String>,
        /// Export CSV du rapport (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let opts = AssignOptions {
        slot_capacity: cli.capacity,
        weekly_cap: cli.weekly_cap,
    };
    let mut scheduler = Scheduler::with_options(opts);

    if let Some(path) = &cli.roster_json {
        for e in io::load_roster_json(path)?.employees {
            scheduler.register(&e.name, &e.preferences.ranked())?;
        }
    }
    if let Some(path) = &cli.employees {
        for e in io::import_employees_csv(path)? {
            scheduler.register(&e.name, &e.preferences.ranked())?;
        }
    }
    for raw in &cli.extra {
        let e = io::parse_employee_arg(raw).with_context(|| format!("--employee {raw}"))?;
        scheduler.register(&e.name, &e.preferences.ranked())?;
    }

    let code = match cli.cmd {
        Commands::List { out_json } => {
            for (name, prefs) in scheduler.list_employees() {
                let prefs: Vec<&str> = prefs.iter().map(|p| p.as_str()).collect();
                println!("{name}: [{}]", prefs.join(", "));
            }
            if let Some(path) = out_json {
                io::export_roster_json(path, scheduler.roster())?;
            }
            0
        }
        Commands::Generate {
            day,
            out_json,
            out_csv,
        } => {
            let only = day.as_deref().map(parse_day).transpose()?;
            let schedule = scheduler.generate_schedule();
            let grid = TextGrid::default();
            match only {
                Some(day) => println!("{}", grid.render_day(schedule, day)),
                None => print!("{}", grid.render(schedule)),
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, schedule)?;
            }
            0
        }
        Commands::Check { schedule, report } => {
            let schedule = match schedule {
                Some(path) => io::load_schedule_json(path)?,
                None => scheduler.generate_schedule().clone(),
            };
            let violations = scheduler.detect_violations(&schedule);
            let coverage = scheduler.coverage(&schedule);

            for v in &violations {
                eprintln!("violation: {}", describe(v));
            }
            for g in &coverage.gaps {
                eprintln!("gap: {} {} ({} missing)", g.day, g.shift, g.missing);
            }
            if coverage.understaffed() {
                eprintln!(
                    "warning: {} employee(s), at least {} needed for full coverage",
                    coverage.staff, coverage.min_staff_required
                );
            }
            if let Some(path) = report {
                io::export_check_csv(path, &violations, &coverage.gaps)?;
            }

            if violations.is_empty() && coverage.is_complete() {
                println!("OK: schedule complete");
                0
            } else {
                eprintln!(
                    "Found {} violation(s), {} missing seat(s)",
                    violations.len(),
                    coverage.missing_seats()
                );
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn parse_day(raw: &str) -> Result<Day> {
    if raw.trim().eq_ignore_ascii_case("today") {
        return Ok(Day::from(Local::now().weekday()));
    }
    raw.parse::<Day>().with_context(|| format!("--day {raw}"))
}

fn describe(v: &Violation) -> String {
    match v {
        Violation::OverCapacity { day, shift, count } => {
            format!("{day} {shift} holds {count} employees")
        }
        Violation::DoubleBooking { day, employee } => {
            format!("{employee} works more than one shift on {day}")
        }
        Violation::WeeklyCapExceeded { employee, count } => {
            format!("{employee} works {count} shifts this week")
        }
    }
}
