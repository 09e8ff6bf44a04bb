// src/cli.rs
//
// Command-line front-end. Same engine, same report as the GUI; output is an
// aligned text table or CSV/TSV through `csv::write_row`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::consts::{DATE_DISPLAY_FORMAT, SETTINGS_FILE};
use crate::config::options::{parse_date, OutputFormat, ReportOptions};
use crate::config::settings::{LoggingSettings, Settings};
use crate::csv::write_row;
use crate::engine::{all_window_deltas, parse_timestamp, DateRange, ObservationSet, RawRecord, Window};
use crate::error::{Error, Result};
use crate::report::{fmt_count, fmt_signed, Report};
use crate::store;

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Vote-count monitor: snapshots and growth from the observation log")]
pub struct Cli {
    #[arg(long, global = true, help = "Observation log (overrides the settings file)")]
    pub log: Option<PathBuf>,

    #[arg(long, global = true, default_value = SETTINGS_FILE, help = "Settings file (TOML, optional)")]
    pub settings: PathBuf,

    #[arg(short, long, global = true, help = "Debug logging to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Last-day totals, day-over-day growth, window growth and standings
    Report(ReportArgs),
    /// Distinct project titles in the log
    Projects,
    /// Per-project growth for every window
    Windows(FormatArgs),
    /// Append one observation to the log
    Record(RecordArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    #[arg(long, default_value = "table", help = "table, csv or tsv")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[arg(short = 'p', long = "project", help = "Project title to include (repeatable; default: all)")]
    pub projects: Vec<String>,

    #[arg(long, value_parser = date_arg, help = "First day, YYYY-MM-DD (default: first day in log)")]
    pub from: Option<NaiveDate>,

    #[arg(long, value_parser = date_arg, help = "Last day, YYYY-MM-DD (default: last day in log)")]
    pub to: Option<NaiveDate>,

    #[arg(long, help = "Also list every filtered observation")]
    pub details: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct RecordArgs {
    #[arg(long, help = "Project title")]
    pub title: String,

    #[arg(long, help = "Vote count as shown on the page (free text)")]
    pub votes: String,

    #[arg(long, help = "Timestamp DD-MM-YYYY HH:MM:SS (default: now)")]
    pub at: Option<String>,
}

fn date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

pub fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(&cli.settings)?;
    if let Some(p) = cli.log {
        settings.store.path = p;
    }
    let logging = if cli.verbose { LoggingSettings::stderr("debug") } else { settings.logging.clone() };
    crate::log::init(&logging)?;

    let path = settings.store.path.as_path();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Record(args) = &cli.command {
        return record(&mut out, path, args);
    }

    let loaded = store::load_observations(path)?;
    if loaded.skipped() > 0 {
        logw!("CLI: {} malformed row(s) skipped", loaded.skipped());
    }
    let set = &loaded.observations;
    if set.is_empty() {
        writeln!(out, "No data to display. Record observations into {} first.", path.display())?;
        return Ok(());
    }

    match &cli.command {
        Command::Projects => {
            for t in set.titles() {
                writeln!(out, "{t}")?;
            }
        }
        Command::Windows(args) => write_windows(&mut out, set, args.format)?,
        Command::Report(args) => {
            let opts = report_options(set, args);
            let report = Report::build(set, &opts, loaded.skipped());
            write_report(&mut out, &report, args.format.format, args.details)?;
        }
        Command::Record(_) => {}
    }
    out.flush()?;
    Ok(())
}

/// Defaults (all projects, full span) overridden by the flags.
pub fn report_options(set: &ObservationSet, args: &ReportArgs) -> ReportOptions {
    let (start, end) = set.date_span().unwrap_or((NaiveDate::MIN, NaiveDate::MIN));
    let mut opts = ReportOptions::new(set.titles(), DateRange::new(start, end));

    if !args.projects.is_empty() {
        opts.selection = args.projects.iter().map(|p| s!(p.trim())).collect();
        let known = set.titles();
        for p in opts.selection.iter().filter(|p| !known.contains(*p)) {
            logw!("CLI: project '{}' not in log", p);
        }
    }
    if let Some(from) = args.from {
        opts.range.start = from;
    }
    if let Some(to) = args.to {
        opts.range.end = to;
    }
    opts
}

fn record<W: Write>(out: &mut W, path: &Path, args: &RecordArgs) -> Result<()> {
    let rec = match &args.at {
        Some(at) => {
            if parse_timestamp(at).is_none() {
                return Err(Error::InvalidTimestamp(s!(at.trim())));
            }
            RawRecord::new(args.title.trim(), args.votes.as_str(), at.trim())
        }
        None => RawRecord::now(args.title.trim(), args.votes.as_str()),
    };
    let appended = store::append_records(path, &[rec])?;
    writeln!(out, "Appended {} row(s) to {}", appended.written, path.display())?;
    Ok(())
}

/* ---------------- Rendering ---------------- */

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat, details: bool) -> io::Result<()> {
    let mut sections: Vec<(String, Vec<String>, Vec<Vec<String>>)> = Vec::new();

    if let Some(last) = report.last_date {
        sections.push((
            format!("Total votes per project on {}", last.format(DATE_DISPLAY_FORMAT)),
            vec![s!("Project"), s!("Votes")],
            report.last_day.iter()
                .map(|s| vec![s.project_title.clone(), fmt_count(s.vote_count)])
                .collect(),
        ));
    }

    if let Some(prev) = report.day_over_day.prev_date {
        sections.push((
            format!("Growth since {}", prev.format(DATE_DISPLAY_FORMAT)),
            vec![s!("Project"), s!("Last"), s!("Previous"), s!("Growth")],
            report.day_over_day.rows.iter()
                .map(|r| vec![
                    r.project_title.clone(),
                    fmt_count(r.last),
                    fmt_count(r.previous),
                    fmt_signed(r.diff),
                ])
                .collect(),
        ));
    }

    sections.push((
        s!("Window growth (all projects, full history)"),
        vec![s!("Window"), s!("Current"), s!("Growth")],
        report.windows.iter()
            .map(|w| vec![
                s!(w.window.label()),
                w.current.map(|k| k.to_string()).unwrap_or_default(),
                fmt_signed(w.total()),
            ])
            .collect(),
    ));

    sections.push((
        s!("Current votes"),
        vec![s!("Project"), s!("Votes"), s!("As of")],
        report.standings.iter()
            .map(|o| vec![
                o.project_title.clone(),
                fmt_count(o.vote_count),
                o.observed_at.format("%d.%m.%Y %H:%M").to_string(),
            ])
            .collect(),
    ));

    if details {
        sections.push((
            s!("Observations"),
            vec![s!("Project"), s!("Votes"), s!("Timestamp")],
            report.details.iter()
                .map(|o| vec![
                    o.project_title.clone(),
                    o.vote_count.to_string(),
                    o.observed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                ])
                .collect(),
        ));
    }

    if report.is_empty() {
        writeln!(out, "Filter matches no observations.")?;
    }
    for (i, (title, headers, rows)) in sections.iter().enumerate() {
        if i > 0 { writeln!(out)?; }
        write_section(out, title, headers, rows, format)?;
    }
    if report.skipped > 0 && format == OutputFormat::Table {
        writeln!(out)?;
        writeln!(out, "({} malformed row(s) skipped)", report.skipped)?;
    }
    Ok(())
}

pub fn write_windows<W: Write>(out: &mut W, set: &ObservationSet, format: OutputFormat) -> io::Result<()> {
    let all = all_window_deltas(set);
    let mut headers = vec![s!("Project")];
    headers.extend(Window::ALL.iter().map(|w| s!(w.as_str())));

    let mut rows: Vec<Vec<String>> = set.titles().into_iter()
        .map(|t| {
            let mut row = vec![t.clone()];
            row.extend(all.iter().map(|w| w.get(&t).map(fmt_signed).unwrap_or_default()));
            row
        })
        .collect();
    let mut total = vec![s!("Total")];
    total.extend(all.iter().map(|w| fmt_signed(w.total())));
    rows.push(total);

    write_section(out, "Growth since window start", &headers, &rows, format)
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    headers: &[String],
    rows: &[Vec<String>],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Delimited(d) => {
            write_row(&mut *out, headers, d.sep())?;
            for r in rows {
                write_row(&mut *out, r, d.sep())?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "{title}")?;
            write_aligned(out, headers, rows)
        }
    }
}

/// Left-align the first column, right-align the rest.
fn write_aligned<W: Write>(out: &mut W, headers: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (ci, cell) in r.iter().enumerate().take(cols) {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let line = |out: &mut W, cells: &[String]| -> io::Result<()> {
        let mut parts = Vec::with_capacity(cols);
        for (ci, w) in widths.iter().enumerate() {
            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
            let pad = w.saturating_sub(cell.chars().count());
            parts.push(if ci == 0 {
                format!("{cell}{}", " ".repeat(pad))
            } else {
                format!("{}{cell}", " ".repeat(pad))
            });
        }
        writeln!(out, "  {}", parts.join("  ").trim_end())
    };

    line(&mut *out, headers)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "  {}", rule.join("  "))?;
    for r in rows {
        line(&mut *out, r)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Observation;

    fn at(day: u32, h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample() -> ObservationSet {
        ObservationSet::new(vec![
            Observation::new("Park", 1000, at(1, 9)),
            Observation::new("Park", 1500, at(2, 9)),
            Observation::new("Square", 40, at(2, 10)),
        ])
    }

    #[test]
    fn parses_report_flags() {
        let cli = Cli::try_parse_from([
            "cli", "--log", "x.csv", "report", "-p", "Park", "--from", "2024-05-01", "--format", "csv",
        ]).unwrap();
        assert_eq!(cli.log, Some(PathBuf::from("x.csv")));
        let Command::Report(args) = cli.command else { panic!("expected report") };
        assert_eq!(args.projects, vec!["Park"]);
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(matches!(args.format.format, OutputFormat::Delimited(_)));
    }

    #[test]
    fn rejects_bad_date_flag() {
        assert!(Cli::try_parse_from(["cli", "report", "--to", "02.05.2024"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let set = sample();
        let args = ReportArgs {
            projects: vec![s!("Square")],
            from: NaiveDate::from_ymd_opt(2024, 5, 2),
            to: None,
            details: false,
            format: FormatArgs { format: OutputFormat::Table },
        };
        let opts = report_options(&set, &args);
        assert_eq!(opts.selection.len(), 1);
        assert_eq!(opts.range.start, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(opts.range.end, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    }

    #[test]
    fn table_report_mentions_growth_and_totals() {
        let set = sample();
        let opts = ReportOptions::defaults_for(&set).unwrap();
        let report = Report::build(&set, &opts, 2);
        let mut buf = Vec::new();
        write_report(&mut buf, &report, OutputFormat::Table, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total votes per project on 02.05.2024"));
        assert!(text.contains("Growth since 01.05.2024"));
        assert!(text.contains("1 500"));
        assert!(text.contains("+500"));
        assert!(text.contains("(2 malformed row(s) skipped)"));
    }

    #[test]
    fn windows_csv_has_total_row() {
        let mut buf = Vec::new();
        write_windows(&mut buf, &sample(), "csv".parse().unwrap()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Project,hour,day,week,month"));
        assert!(text.lines().any(|l| l.starts_with("Total,")));
    }
}
