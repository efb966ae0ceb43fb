use log::debug;
use std::collections::HashSet;

use super::achievements_model::{AchievementCriterion, UserStats};

/// Ids of catalog entries the user qualifies for but has not earned yet.
///
/// A criterion is met when the matching statistic is greater than or equal to
/// its threshold. Results follow catalog order and never repeat an id, and
/// nothing in `already_earned` is ever returned. Recording the results is
/// the caller's job.
pub fn evaluate_achievements(
    user_id: &str,
    stats: &UserStats,
    catalog: &[AchievementCriterion],
    already_earned: &HashSet<String>,
) -> Vec<String> {
    let mut newly_earned: Vec<String> = Vec::new();

    for criterion in catalog {
        if already_earned.contains(&criterion.id) || newly_earned.contains(&criterion.id) {
            continue;
        }
        let value = stats.value_for(criterion.criteria_type);
        if value >= criterion.threshold {
            debug!(
                "User {} meets achievement {} ({:?} {} >= {})",
                user_id, criterion.id, criterion.criteria_type, value, criterion.threshold
            );
            newly_earned.push(criterion.id.clone());
        }
    }

    newly_earned
}
