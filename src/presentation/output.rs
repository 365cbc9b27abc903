//! Run summary rendering (text/JSON)

use serde_json::{json, Value};

use crate::application::RotationReport;
use crate::domain::policies::RetentionDecision;

fn names(decisions: &[RetentionDecision]) -> Vec<String> {
    decisions.iter().map(|d| d.volume.name.clone()).collect()
}

/// One-line human summary of a successful pass
pub fn render_summary(report: &RotationReport) -> String {
    let head = match &report.created {
        Some(snapshot) => format!("created {}", snapshot),
        None if report.today_exists => {
            format!("today's snapshot {} already exists", report.todays_snapshot)
        }
        None => "nothing created".to_string(),
    };
    format!(
        "{}: {}, removed {}, kept {}",
        report.source,
        head,
        report.deleted.len(),
        report.kept.len()
    )
}

/// JSON summary of a successful pass, printed with `--json`
pub fn render_json(report: &RotationReport, dry_run: bool) -> Value {
    json!({
        "event": "rotate",
        "status": "success",
        "dry_run": dry_run,
        "group": report.source.group,
        "source": report.source.name,
        "snapshot": report.todays_snapshot,
        "today_exists": report.today_exists,
        "created": report.created.as_ref().map(|v| v.name.clone()),
        "deleted": names(&report.deleted),
        "kept": names(&report.kept),
    })
}
