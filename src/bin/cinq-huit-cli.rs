#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use cinq_huit::{
    calendar, io,
    io::TeamSchedule,
    status::{prepare_status, TextStatus},
    RosterConfig, Rotation, ShiftKind, TransferWindow,
};
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI du roulement 5 équipes
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration (sinon variables d'environnement)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct TeamDay {
    /// Numéro d'équipe (1..=5)
    #[arg(long)]
    team: u8,
    /// YYYY-MM-DD, RFC3339 ou `today`
    #[arg(long, default_value = "today")]
    date: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Poste d'une équipe pour un jour
    Shift(TeamDay),

    /// Code de poste d'une équipe pour un jour
    Code(TeamDay),

    /// Prochain poste travaillé après la date
    Next(TeamDay),

    /// Jours travaillés de la semaine (lundi → dimanche) contenant la date
    Week {
        #[command(flatten)]
        at: TeamDay,
        /// Ne garder qu'un poste : M, E ou N
        #[arg(long, value_parser = parse_shift)]
        only: Option<ShiftKind>,
    },

    /// Poste de chaque équipe pour un jour
    Day {
        #[arg(long, default_value = "today")]
        date: String,
    },

    /// Relèves entre deux équipes
    Transfers {
        #[arg(long)]
        team: u8,
        #[arg(long)]
        with: u8,
        #[arg(long, default_value = "today")]
        from: String,
        /// nombre de jours, date de départ incluse
        #[arg(long, conflicts_with = "until")]
        days: Option<u32>,
        /// date de fin incluse
        #[arg(long)]
        until: Option<String>,
    },

    /// État courant d'une équipe (avant 07:00, la veille compte encore)
    Today {
        #[arg(long)]
        team: u8,
    },

    /// Exporter le planning d'une équipe
    Export {
        #[arg(long)]
        team: u8,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        json: Option<String>,
        #[arg(long)]
        csv: Option<String>,
    },

    /// Code date `YYWW.D`
    DateCode {
        #[arg(long, default_value = "today")]
        date: String,
    },
}

fn parse_shift(raw: &str) -> Result<ShiftKind, String> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ShiftKind::from_letter(c)
            .filter(|k| k.is_working())
            .ok_or_else(|| format!("unknown shift letter: {raw} (expected M, E or N)")),
        _ => Err(format!("expected a single shift letter, got {raw:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = match &cli.config {
        Some(path) => RosterConfig::load_json(path)?,
        None => RosterConfig::from_env(),
    };
    let rotation = Rotation::new(config).context("invalid roster configuration")?;

    // un seul instant pour toute la commande
    let now = Local::now().naive_local();
    let today = now.date();

    let code = match cli.cmd {
        Commands::Shift(TeamDay { team, date }) => {
            let date = io::parse_date(&date, today)?;
            let shift = rotation.shift_for(date, team)?;
            println!("{date} team {team}: {shift} ({})", shift.hours_label());
            0
        }
        Commands::Code(TeamDay { team, date }) => {
            let date = io::parse_date(&date, today)?;
            println!("{}", rotation.shift_code(date, team)?);
            0
        }
        Commands::Next(TeamDay { team, date }) => {
            let date = io::parse_date(&date, today)?;
            match rotation.next_working_shift(date, team)? {
                Some(next) => {
                    println!("{} on {} [{}]", next.shift, next.date, next.code);
                    0
                }
                None => {
                    eprintln!("no upcoming shift found for team {team}");
                    // Code 2 = WARNING/INCOMPLETE
                    2
                }
            }
        }
        Commands::Week {
            at: TeamDay { team, date },
            only,
        } => {
            let date = io::parse_date(&date, today)?;
            let week = calendar::week_range(date).context("date out of range")?;
            let mut shifts = rotation.shifts_in_range(team, week.start, week.end)?;
            if let Some(kind) = only {
                shifts.retain(|a| a.shift == kind);
            }
            println!(
                "Week {} ({} .. {}), team {team}",
                &calendar::date_code(week.start)[..4],
                week.start,
                week.end
            );
            for a in &shifts {
                println!(
                    "{} {}  {:<8} {:<8} {}",
                    a.date,
                    a.date.weekday(),
                    a.code,
                    a.shift.name(),
                    a.shift.hours_label()
                );
            }
            0
        }
        Commands::Day { date } => {
            let date = io::parse_date(&date, today)?;
            println!("{date} ({})", calendar::date_code(date));
            for t in rotation.teams_on(date)? {
                println!("team {}: {}", t.team, t.shift);
            }
            0
        }
        Commands::Transfers {
            team,
            with,
            from,
            days,
            until,
        } => {
            let from = io::parse_date(&from, today)?;
            let window = match (days, until) {
                // --days et --until sont exclusifs côté clap
                (Some(n), _) => TransferWindow::Days(n),
                (None, Some(raw)) => TransferWindow::Until(io::parse_date(&raw, today)?),
                (None, None) => TransferWindow::Days(rotation.config().cycle_length),
            };
            let events = rotation.transfers_between(team, with, from, window)?;
            if events.is_empty() {
                println!("no transfers between team {team} and team {with}");
            }
            for e in &events {
                println!(
                    "{} {:<8} team {team} {} [{}] / team {with} {} [{}]",
                    e.date,
                    e.kind.to_string(),
                    e.team_a_shift,
                    e.team_a_code,
                    e.team_b_shift,
                    e.team_b_code
                );
            }
            0
        }
        Commands::Today { team } => {
            let report = prepare_status(&rotation, team, now, &TextStatus)?;
            println!("{}", report.content);
            0
        }
        Commands::Export {
            team,
            from,
            to,
            json,
            csv,
        } => {
            if json.is_none() && csv.is_none() {
                bail!("nothing to export: pass --json and/or --csv");
            }
            let start = io::parse_date(&from, today)?;
            let end = io::parse_date(&to, today)?;
            let schedule = TeamSchedule {
                team,
                start,
                end,
                shifts: rotation.schedule(team, start, end)?,
            };
            if let Some(path) = json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            println!("exported {} day(s) for team {team}", schedule.shifts.len());
            0
        }
        Commands::DateCode { date } => {
            let date = io::parse_date(&date, today)?;
            println!("{}", calendar::date_code(date));
            0
        }
    };

    std::process::exit(code);
}
