use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use cvlift_parsing::{normalize_date_range, parse_resume_bytes, ResumeRecord};
use cvlift_pdf_lopdf::LopdfBackend;

/// Uploads above this size are rejected before parsing.
const MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Parse a resume PDF into a structured JSON record
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the resume PDF
    file_path: PathBuf,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Rewrite entry dates to YYYY-MM form where recognizable
    #[arg(long)]
    normalize_dates: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let metadata = fs::metadata(&cli.file_path)
        .with_context(|| format!("cannot read {}", cli.file_path.display()))?;
    if metadata.len() > MAX_INPUT_BYTES {
        bail!(
            "{} is larger than the 5 MiB upload limit",
            cli.file_path.display()
        );
    }

    let bytes = fs::read(&cli.file_path)
        .with_context(|| format!("cannot read {}", cli.file_path.display()))?;

    let mut record = parse_resume_bytes(&bytes, &LopdfBackend::new())
        .context("could not parse resume, please try a different file")?;

    if cli.normalize_dates {
        normalize_record_dates(&mut record);
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Apply date normalization to every entry date in place. Dates that do
/// not contain a recognizable range are left verbatim.
fn normalize_record_dates(record: &mut ResumeRecord) {
    let dates = record
        .education
        .iter_mut()
        .map(|e| &mut e.date)
        .chain(record.work_experience.iter_mut().map(|e| &mut e.date))
        .chain(record.projects.iter_mut().map(|e| &mut e.date));
    for date in dates {
        *date = render_normalized(date);
    }
}

fn render_normalized(raw: &str) -> String {
    let range = normalize_date_range(raw);
    if range.start.is_empty() {
        return raw.to_string();
    }
    if range.is_current {
        format!("{} - Present", range.start)
    } else if !range.end.is_empty() {
        format!("{} - {}", range.start, range.end)
    } else {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvlift_parsing::WorkEntry;

    #[test]
    fn test_render_normalized_ranges() {
        assert_eq!(render_normalized("Jan 2020 - Present"), "2020-01 - Present");
        assert_eq!(render_normalized("2016 - 2020"), "2016-01 - 2020-01");
        assert_eq!(render_normalized("2021"), "2021-01");
        assert_eq!(render_normalized("no dates here"), "no dates here");
    }

    #[test]
    fn test_normalize_record_dates_touches_all_entry_kinds() {
        let mut record = ResumeRecord::default();
        record.work_experience.push(WorkEntry {
            date: "Mar 2019 - Dec 2021".to_string(),
            ..Default::default()
        });
        normalize_record_dates(&mut record);
        assert_eq!(record.work_experience[0].date, "2019-03 - 2021-12");
    }
}
