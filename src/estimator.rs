use chrono::{Duration, Local, NaiveDate};

/// Rough estimate: 15 days per kilogram. Placeholder heuristic with no
/// physiological basis.
const DAYS_PER_KG: f64 = 15.0;

/// Result of the goal-date projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEstimate {
    pub days: i64,
    pub goal_date: NaiveDate,
}

/// Project the date the target weight is reached, assuming a fixed
/// linear rate. Pure and deterministic for a given `today`.
pub fn estimate(current_weight_kg: f64, target_weight_kg: f64, today: NaiveDate) -> GoalEstimate {
    let days = ((target_weight_kg - current_weight_kg).abs() * DAYS_PER_KG).round() as i64;
    GoalEstimate {
        days,
        goal_date: today + Duration::days(days),
    }
}

/// Convenience wrapper over [`estimate`] anchored at the local date.
pub fn estimate_from_today(current_weight_kg: f64, target_weight_kg: f64) -> GoalEstimate {
    estimate(current_weight_kg, target_weight_kg, Local::now().date_naive())
}

/// Format a goal date the way it is shown to the user, e.g. `Nov 10, 2026`.
pub fn format_goal_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
