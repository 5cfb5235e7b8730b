//! Resume content entity consumed by the document renderer.
//!
//! This is the input shape only — profile editing, AI tailoring and storage
//! live upstream; the renderer treats the resume as read-only content.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::settings::DocumentSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    /// Upstream entity id, echoed into the page tree for job correlation.
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    /// Per-document overrides layered over the template defaults.
    pub document_settings: Option<DocumentSettings>,

    pub skills: Vec<SkillGroup>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

impl Resume {
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.trim().to_string();
        let last = self.last_name.trim();
        if !last.is_empty() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(last);
        }
        name
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub date: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub date: Option<String>,
    pub credential_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_with_single_space() {
        let resume = Resume {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(resume.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_single_name_no_trailing_space() {
        let resume = Resume {
            first_name: "Cher".to_string(),
            ..Default::default()
        };
        assert_eq!(resume.full_name(), "Cher");
    }

    #[test]
    fn test_resume_deserializes_from_sparse_json() {
        let resume: Resume =
            serde_json::from_str(r#"{"first_name":"Ada","last_name":"Lovelace"}"#).expect("json");
        assert!(resume.email.is_none());
        assert!(resume.skills.is_empty());
        assert!(resume.document_settings.is_none());
    }
}
