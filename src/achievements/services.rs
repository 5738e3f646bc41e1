use crate::catalog::{Catalog, MULTI_PATH};
use crate::progress::repo::UserProgress;

/// Unions the achievement sets across all of a user's progress records,
/// preserving first-seen order.
///
/// `multi_path` is derived on read, never persisted: it appears when at
/// least three paths are fully complete.
pub fn collect_user_achievements(catalog: &Catalog, progress: &[UserProgress]) -> Vec<String> {
    let mut achievements: Vec<String> = Vec::new();
    for row in progress {
        for achievement in &row.achievements.0 {
            if !achievements.contains(achievement) {
                achievements.push(achievement.clone());
            }
        }
    }

    let completed_paths = progress
        .iter()
        .filter(|row| {
            catalog
                .path(&row.career_path_id)
                .map(|path| row.completed_milestones.0.len() == path.total_milestones())
                .unwrap_or(false)
        })
        .count();

    if completed_paths >= 3 && !achievements.iter().any(|a| a == MULTI_PATH) {
        achievements.push(MULTI_PATH.to_string());
    }

    achievements
}
