use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

mod data;

/// Achievement ids granted by the progress engine.
pub const FIRST_STEP: &str = "first_step";
pub const HALFWAY_HERO: &str = "halfway_hero";
pub const PATH_MASTER: &str = "path_master";
pub const SPEED_DEMON: &str = "speed_demon";
pub const MULTI_PATH: &str = "multi_path";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Article,
    Course,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: u32,
    pub resources: Vec<Resource>,
    pub estimated_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub milestones: Vec<Milestone>,
    pub created_at: OffsetDateTime,
}

impl CareerPath {
    pub fn total_milestones(&self) -> usize {
        self.milestones.len()
    }

    pub fn total_estimated_days(&self) -> i64 {
        self.milestones.iter().map(|m| m.estimated_days).sum()
    }
}

/// A single option of a quiz question. Each field is an optional
/// contribution to the recommendation scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_multiplier: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

/// Immutable content catalog, seeded once at startup and shared
/// process-wide behind an `Arc`. There is no runtime mutation path.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub paths: Vec<CareerPath>,
    pub questions: Vec<QuizQuestion>,
    pub achievements: Vec<AchievementDef>,
}

impl Catalog {
    pub fn seed() -> Self {
        let mut paths = data::career_paths();
        // Milestones are ordered by their explicit `order` field, not
        // by insertion order.
        for path in &mut paths {
            path.milestones.sort_by_key(|m| m.order);
        }
        Self {
            paths,
            questions: data::quiz_questions(),
            achievements: data::achievement_defs(),
        }
    }

    pub fn path(&self, id: &str) -> Option<&CareerPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_unique_path_ids() {
        let catalog = Catalog::seed();
        let mut ids: Vec<&str> = catalog.paths.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.paths.len());
    }

    #[test]
    fn seed_milestones_are_sorted_by_order() {
        let catalog = Catalog::seed();
        for path in &catalog.paths {
            assert!(!path.milestones.is_empty(), "path {} has no milestones", path.id);
            for pair in path.milestones.windows(2) {
                assert!(pair[0].order <= pair[1].order, "path {} out of order", path.id);
            }
        }
    }

    #[test]
    fn quiz_options_reference_seeded_paths() {
        let catalog = Catalog::seed();
        for question in &catalog.questions {
            for option in &question.options {
                for path_id in &option.paths {
                    assert!(
                        catalog.path(path_id).is_some(),
                        "question {} references unknown path {}",
                        question.id,
                        path_id
                    );
                }
            }
        }
    }

    #[test]
    fn five_achievement_definitions() {
        let catalog = Catalog::seed();
        let ids: Vec<&str> = catalog
            .achievements
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![FIRST_STEP, HALFWAY_HERO, PATH_MASTER, SPEED_DEMON, MULTI_PATH]
        );
    }

    #[test]
    fn path_lookup_by_id() {
        let catalog = Catalog::seed();
        let first = &catalog.paths[0];
        assert_eq!(catalog.path(&first.id).unwrap().name, first.name);
        assert!(catalog.path("no-such-path").is_none());
    }

    #[test]
    fn resource_type_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceType::Video).unwrap();
        assert_eq!(json, "\"video\"");
    }
}
