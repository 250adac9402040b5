use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub brand_name: String,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub client_country: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub software: Vec<String>,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Only the brand name is validated. The category reference is taken as
/// given and is not checked against existing categories.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Brand name cannot be empty"))]
    pub brand_name: String,

    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub client_country: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub software: Vec<String>,

    pub category_id: Uuid,
}

impl NewProject {
    pub fn normalized(mut self) -> Self {
        self.brand_name = self.brand_name.trim().to_string();
        self.software = dedup_software(self.software);
        self
    }
}

/// Edit payload from the project form. The category reference is not part
/// of the form, so a project never moves between categories on update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, message = "Brand name cannot be empty"))]
    pub brand_name: String,

    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub client_country: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub software: Vec<String>,
}

impl UpdateProjectRequest {
    pub fn normalized(mut self) -> Self {
        self.brand_name = self.brand_name.trim().to_string();
        self.software = dedup_software(self.software);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// The software list behaves as an order-preserving set: tags are trimmed,
/// empties dropped, and later duplicates suppressed.
pub fn dedup_software(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() || seen.contains(&tag) {
            continue;
        }
        seen.push(tag);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn software_duplicates_collapse_to_one() {
        let tags = vec![
            "Premiere Pro".to_string(),
            "After Effects".to_string(),
            "Premiere Pro".to_string(),
        ];
        assert_eq!(dedup_software(tags), vec!["Premiere Pro", "After Effects"]);
    }

    #[test]
    fn software_order_is_preserved() {
        let tags = vec![
            "DaVinci Resolve".to_string(),
            "Premiere Pro".to_string(),
            "Blender".to_string(),
        ];
        assert_eq!(
            dedup_software(tags),
            vec!["DaVinci Resolve", "Premiere Pro", "Blender"]
        );
    }

    #[test]
    fn software_empty_tags_are_dropped() {
        let tags = vec!["  ".to_string(), "Premiere Pro".to_string(), "".to_string()];
        assert_eq!(dedup_software(tags), vec!["Premiere Pro"]);
    }
}
