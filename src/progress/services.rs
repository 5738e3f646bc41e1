//! Pure progress-engine rules: milestone set updates and achievement
//! derivation. Kept free of storage concerns so the thresholds are
//! testable in isolation.

use crate::catalog::{FIRST_STEP, HALFWAY_HERO, PATH_MASTER};

/// Applies a completion toggle to the milestone set.
///
/// Returns `true` when the set actually changed: marking an already
/// completed milestone again is a no-op, as is un-marking an absent one.
pub fn apply_milestone_update(
    completed: &mut Vec<String>,
    milestone_id: &str,
    mark_completed: bool,
) -> bool {
    if mark_completed {
        if completed.iter().any(|m| m == milestone_id) {
            return false;
        }
        completed.push(milestone_id.to_string());
        true
    } else {
        let before = completed.len();
        completed.retain(|m| m != milestone_id);
        completed.len() != before
    }
}

/// Grants achievements for the current completion count.
///
/// Achievements are one-way: this is only called after a successful
/// completion, never after a removal, so earned badges stay earned.
/// The halfway threshold intentionally uses the non-strict real-number
/// comparison `count >= total / 2`, so a path of 5 grants at 3 and a
/// path of 4 grants at 2.
pub fn derive_achievements(
    completed_count: usize,
    total_milestones: usize,
    achievements: &mut Vec<String>,
) {
    let mut grant = |id: &str| {
        if !achievements.iter().any(|a| a == id) {
            achievements.push(id.to_string());
        }
    };

    if completed_count >= 1 {
        grant(FIRST_STEP);
    }
    if completed_count as f64 >= total_milestones as f64 / 2.0 {
        grant(HALFWAY_HERO);
    }
    if completed_count == total_milestones {
        grant(PATH_MASTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn completing_a_milestone_twice_is_idempotent() {
        let mut completed = vec![];
        assert!(apply_milestone_update(&mut completed, "m1", true));
        assert!(!apply_milestone_update(&mut completed, "m1", true));
        assert_eq!(completed, ids(&["m1"]));
    }

    #[test]
    fn removal_drops_the_milestone_and_preserves_order() {
        let mut completed = ids(&["m1", "m2", "m3"]);
        assert!(apply_milestone_update(&mut completed, "m2", false));
        assert_eq!(completed, ids(&["m1", "m3"]));
        assert!(!apply_milestone_update(&mut completed, "m2", false));
    }

    #[test]
    fn first_step_granted_at_one() {
        let mut achievements = vec![];
        derive_achievements(1, 6, &mut achievements);
        assert_eq!(achievements, ids(&["first_step"]));
    }

    #[test]
    fn halfway_uses_non_strict_real_comparison() {
        // total=5: 3 >= 2.5 grants, 2 does not
        let mut achievements = vec![];
        derive_achievements(2, 5, &mut achievements);
        assert!(!achievements.contains(&"halfway_hero".to_string()));
        derive_achievements(3, 5, &mut achievements);
        assert!(achievements.contains(&"halfway_hero".to_string()));

        // total=4: the tie at exactly half grants
        let mut achievements = vec![];
        derive_achievements(2, 4, &mut achievements);
        assert!(achievements.contains(&"halfway_hero".to_string()));

        // total=6: 3 >= 3.0 grants
        let mut achievements = vec![];
        derive_achievements(3, 6, &mut achievements);
        assert!(achievements.contains(&"halfway_hero".to_string()));
    }

    #[test]
    fn path_master_only_at_full_completion() {
        let mut achievements = vec![];
        derive_achievements(5, 6, &mut achievements);
        assert!(!achievements.contains(&"path_master".to_string()));
        derive_achievements(6, 6, &mut achievements);
        assert!(achievements.contains(&"path_master".to_string()));
    }

    #[test]
    fn achievements_are_granted_at_most_once() {
        let mut achievements = vec![];
        derive_achievements(3, 6, &mut achievements);
        derive_achievements(4, 6, &mut achievements);
        let first_step_count = achievements.iter().filter(|a| *a == "first_step").count();
        assert_eq!(first_step_count, 1);
    }

    #[test]
    fn six_milestone_path_grants_in_sequence() {
        let mut completed = vec![];
        let mut achievements = vec![];
        for i in 0..6 {
            assert!(apply_milestone_update(&mut completed, &format!("m{i}"), true));
            derive_achievements(completed.len(), 6, &mut achievements);
            match completed.len() {
                1 | 2 => assert_eq!(achievements, ids(&["first_step"])),
                3..=5 => assert_eq!(achievements, ids(&["first_step", "halfway_hero"])),
                6 => assert_eq!(
                    achievements,
                    ids(&["first_step", "halfway_hero", "path_master"])
                ),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn achievements_survive_milestone_removal() {
        // The engine never calls derive_achievements on removal, so the
        // earned set is untouched.
        let mut completed = ids(&["m1", "m2", "m3"]);
        let mut achievements = vec![];
        derive_achievements(completed.len(), 6, &mut achievements);
        let earned = achievements.clone();

        apply_milestone_update(&mut completed, "m3", false);
        assert_eq!(achievements, earned);
    }
}
