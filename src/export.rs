//! Results CSV export and the end-of-run summary.

use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::aggregate::OutputRecord;

/// Write the output rows, in order, to `output_path`.
/// Booleans are rendered as literal `True`/`False`.
pub fn export_csv(records: &[OutputRecord], output_path: &Path) -> Result<()> {
    debug!(
        "Exporting {} records to CSV: {}",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)
        .context(format!("Failed to create output file: {}", output_path.display()))?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record([
        "source_url",
        "destination_url",
        "pointing_to_count",
        "points_to_list_domain",
    ])?;

    for record in records {
        wtr.write_record([
            record.source_url.as_str(),
            record.destination_url.as_str(),
            &record.pointing_to_count.to_string(),
            bool_literal(record.points_to_list_domain),
        ])?;
    }

    wtr.flush()?;
    info!(
        "Wrote {} rows to {}",
        records.len(),
        output_path.display()
    );

    Ok(())
}

fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Print the end-of-run summary to stdout.
pub fn print_run_summary(records: &[OutputRecord], output_path: &Path) {
    let total = records.len();
    let in_list = records.iter().filter(|r| r.points_to_list_domain).count();
    let abs_path = output_path
        .canonicalize()
        .unwrap_or_else(|_| output_path.to_path_buf());

    println!(
        "\nDone. Processed {} domain(s). Wrote {} rows to {}.",
        total,
        total,
        abs_path.display()
    );
    println!(
        "{} source(s) point to a domain in the input list.",
        in_list
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<OutputRecord> {
        vec![
            OutputRecord {
                source_url: "a.com".to_string(),
                destination_url: "https://target.com/".to_string(),
                pointing_to_count: 2,
                points_to_list_domain: false,
            },
            OutputRecord {
                source_url: "broken.invalid".to_string(),
                destination_url: String::new(),
                pointing_to_count: 0,
                points_to_list_domain: false,
            },
            OutputRecord {
                source_url: "c.com".to_string(),
                destination_url: "https://a.com/".to_string(),
                pointing_to_count: 1,
                points_to_list_domain: true,
            },
        ]
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        export_csv(&sample_records(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "source_url,destination_url,pointing_to_count,points_to_list_domain"
        );
        assert_eq!(lines[1], "a.com,https://target.com/,2,False");
        assert_eq!(lines[2], "broken.invalid,,0,False");
        assert_eq!(lines[3], "c.com,https://a.com/,1,True");
    }

    #[test]
    fn booleans_render_as_python_style_literals() {
        assert_eq!(bool_literal(true), "True");
        assert_eq!(bool_literal(false), "False");
    }
}
