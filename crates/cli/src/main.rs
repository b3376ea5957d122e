// pollgrade - merge Poll Everywhere participation into a Canvas gradebook column

mod exit_codes;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use exit_codes::{EXIT_IDENTITY, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS};
use pollgrade_recon::model::{MismatchReport, ScoredRow};
use pollgrade_recon::{load_engagement, load_roster, reconcile, MergeError};

#[derive(Parser)]
#[command(name = "pollgrade")]
#[command(about = "Combine Poll Everywhere results with a Canvas gradebook")]
#[command(version)]
#[command(after_help = "\
Examples:
  pollgrade gradebook.csv pollev.csv 'Lecture 12'
  pollgrade gradebook.csv pollev.csv 'Lecture 12' -n 3 -o merged.csv
  pollgrade gradebook.csv pollev.csv Quiz -q > merged.csv")]
struct Cli {
    /// Canvas gradebook export
    gradebook_file: PathBuf,

    /// Poll Everywhere participation export
    pe_file: PathBuf,

    /// Name of the new gradebook column (quote it if it has spaces)
    activity_name: String,

    /// Minimum answered questions to earn the point
    #[arg(long, short = 'n', default_value_t = 1, value_name = "N")]
    minimum_answered: u32,

    /// Output file ("-" or omitted for stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Suppress stderr notes (skipped rows, mismatches, summary)
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = cmd_merge(
        &cli.gradebook_file,
        &cli.pe_file,
        &cli.activity_name,
        cli.minimum_answered,
        cli.output_file.as_deref(),
        cli.quiet,
    );

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Map an engine error to its exit code, with a hint where one helps.
    fn merge(err: MergeError) -> Self {
        let (code, hint) = match &err {
            MergeError::IdentityFormat { .. } => (
                EXIT_IDENTITY,
                Some(
                    "netids are 2-3 letters and 1-5 digits at the campus domain; \
                     fix the address in the poll roster"
                        .to_string(),
                ),
            ),
            _ => (EXIT_PARSE, None),
        };
        Self { code, message: err.to_string(), hint }
    }
}

fn cmd_merge(
    gradebook_file: &Path,
    pe_file: &Path,
    activity_name: &str,
    minimum_answered: u32,
    output_file: Option<&Path>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        eprintln!("reading gradebook: {}", gradebook_file.display());
    }
    let gradebook_data = std::fs::read_to_string(gradebook_file)
        .map_err(|e| CliError::io(format!("{}: {}", gradebook_file.display(), e)))?;
    let roster_load = load_roster(&gradebook_data).map_err(CliError::merge)?;

    if !quiet {
        for line in &roster_load.skipped {
            eprintln!("  skipping row {}: empty SIS Login ID", line);
        }
        eprintln!("reading poll export: {}", pe_file.display());
    }
    let pe_data = std::fs::read_to_string(pe_file)
        .map_err(|e| CliError::io(format!("{}: {}", pe_file.display(), e)))?;
    let engagement_load = load_engagement(&pe_data).map_err(CliError::merge)?;

    if !quiet && !engagement_load.skipped.is_empty() {
        eprintln!(
            "  skipped {} poll row(s) with empty email",
            engagement_load.skipped.len()
        );
    }

    let result = reconcile(&roster_load.roster, &engagement_load.engagement, minimum_answered);

    if !quiet {
        print_mismatches(&result.mismatches);
    }

    let output_bytes = render_csv(&result.rows, activity_name)?;

    // "-" is an explicit stdout sink, same as omitting the flag
    let to_stdout = match output_file {
        None => true,
        Some(p) => p.as_os_str() == "-",
    };
    if to_stdout {
        io::stdout()
            .write_all(&output_bytes)
            .map_err(|e| CliError::io(e.to_string()))?;
    } else {
        let path = output_file.unwrap();
        std::fs::write(path, &output_bytes)
            .map_err(|e| CliError::io(format!("{}: {}", path.display(), e)))?;
    }

    if !quiet {
        let s = &result.summary;
        eprintln!("roster: {} students", s.roster_rows);
        eprintln!("poll: {} students", s.engagement_rows);
        eprintln!("participated: {}", s.participated);
        eprintln!("absent: {}", s.absent);
    }

    Ok(())
}

fn print_mismatches(report: &MismatchReport) {
    if !report.missing_from_engagement.is_empty() {
        eprintln!("students in the gradebook but not in poll everywhere:");
        for netid in &report.missing_from_engagement {
            eprintln!("  {}", netid);
        }
    }
    if !report.missing_from_roster.is_empty() {
        eprintln!("students in poll everywhere but not in the gradebook:");
        for netid in &report.missing_from_roster {
            eprintln!("  {}", netid);
        }
    }
}

const OUTPUT_COLUMNS: [&str; 5] = ["Student", "ID", "SIS User ID", "SIS Login ID", "Section"];

/// Render the merged gradebook with the activity column appended.
fn render_csv(rows: &[ScoredRow], activity_name: &str) -> Result<Vec<u8>, CliError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = OUTPUT_COLUMNS.to_vec();
    header.push(activity_name);
    writer
        .write_record(&header)
        .map_err(|e| CliError::io(e.to_string()))?;

    for row in rows {
        let score = if row.score == 1 { "1" } else { "0" };
        writer
            .write_record([
                row.entry.student.as_str(),
                row.entry.id.as_str(),
                row.entry.sis_user_id.as_str(),
                row.entry.sis_login_id.as_str(),
                row.entry.section.as_str(),
                score,
            ])
            .map_err(|e| CliError::io(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| CliError::io(e.to_string()))
}
