//! Analytics and bulk commands: report, summary, simulate, reset

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::output::Output;
use crate::ops::Tracker;

/// Prints task counts per status
pub fn report(tracker: &Tracker, output: &Output) -> Result<()> {
    let report = tracker.productivity_report();
    let rows = report
        .iter()
        .map(|(status, count)| format!("{:<10}: {}", status.as_str().to_uppercase(), count));

    output.section("Productivity Report", &report, rows);
    Ok(())
}

/// Prints task counts per user
pub fn summary(tracker: &Tracker, output: &Output) -> Result<()> {
    let summary = tracker.user_task_summary();
    let rows = summary
        .iter()
        .map(|entry| format!("{} → {} tasks", entry.name, entry.count));

    output.section("User Task Summary", &summary, rows);
    Ok(())
}

/// Generates random tasks; a seed makes the batch reproducible
pub fn simulate(tracker: &mut Tracker, output: &Output, count: usize, seed: Option<u64>) -> Result<()> {
    let created = match seed {
        Some(seed) => {
            output.verbose_ctx("simulate", &format!("Using seed {}", seed));
            tracker.simulate_activity(count, &mut StdRng::seed_from_u64(seed))?
        }
        None => tracker.simulate_activity(count, &mut rand::rng())?,
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "simulated": created.len(),
            "task_ids": created,
        }));
    } else {
        output.success(&format!("Simulated {} random tasks", created.len()));
    }

    Ok(())
}

/// Removes every user and task
pub fn reset(tracker: &mut Tracker, output: &Output) -> Result<()> {
    tracker.reset()?;
    output.success("Database reset");
    Ok(())
}
