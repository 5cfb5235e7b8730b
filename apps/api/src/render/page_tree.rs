//! Document renderer — one parameterized pass from (resolved settings,
//! resume content) to a structured page description.
//!
//! The `PageTree` is what the downstream PDF paint engine consumes: a header
//! block followed by the content sections in fixed input order (skills,
//! experience, projects, education, certifications). Template identity enters
//! only through the resolved settings and the static `TemplateStyle` table —
//! there is one renderer, not ten.
//!
//! Render-boundary policy: an unrecognized template id renders as `classic`
//! instead of failing, so a resume always produces some document. The strict
//! counterpart lives at the resolve boundary (`templates::resolver`).
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{Certification, Education, Project, Resume, SkillGroup, WorkExperience};
use crate::models::settings::{ResolvedSettings, SectionSpacing};
use crate::templates::registry::{ContactField, LayoutVariant, TemplateId};
use crate::templates::resolver::resolve_for;

// ────────────────────────────────────────────────────────────────────────────
// Page tree types
// ────────────────────────────────────────────────────────────────────────────

/// Structured page description ready for PDF serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTree {
    /// Upstream resume id, when the caller supplied one.
    pub resume_id: Option<Uuid>,
    pub template: TemplateId,
    pub variant: LayoutVariant,
    pub settings: ResolvedSettings,
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
}

/// Name + contact line at the top of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: String,
    pub name_size: f32,
    pub bottom_spacing: f32,
    /// Separator glyph placed between contact items by the paint engine.
    pub separator: String,
    /// Present contact fields in the template's order. Absent fields are
    /// already skipped — joining with `separator` can never produce an
    /// orphan glyph.
    pub contact_items: Vec<ContactItem>,
}

impl HeaderBlock {
    /// Plain-text form of the contact line, items joined with the template
    /// separator. Exactly `len - 1` separators, none dangling.
    pub fn contact_line(&self) -> String {
        self.contact_items
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(&format!(" {} ", self.separator))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactItem {
    pub field: ContactField,
    pub text: String,
    /// `mailto:` target for email items.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionBlock {
    pub kind: SectionKind,
    pub title: String,
    pub spacing: SectionSpacing,
    pub items: Vec<SectionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionItem {
    SkillGroup(SkillGroup),
    Experience(WorkExperience),
    Project(Project),
    Education(Education),
    Certification(Certification),
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders a resume into a page tree for the given template id.
///
/// Total: an unrecognized id falls back to classic (logged by
/// `parse_or_classic`), and the resume's own `document_settings` are merged
/// over the template defaults with the resolver's leniency rules.
pub fn render_page(template_id: &str, resume: &Resume) -> PageTree {
    render_for(TemplateId::parse_or_classic(template_id), resume)
}

/// Renders for an already-validated template id.
pub fn render_for(template: TemplateId, resume: &Resume) -> PageTree {
    let overrides = resume.document_settings.clone().unwrap_or_default();
    let settings = resolve_for(template, &overrides);
    let style = template.style();

    let header = HeaderBlock {
        name: resume.full_name(),
        name_size: settings.header_name_size,
        bottom_spacing: settings.header_name_bottom_spacing,
        separator: style.separator.to_string(),
        contact_items: contact_items(resume, &style.contact_order),
    };

    let mut sections = Vec::new();
    if !resume.skills.is_empty() {
        sections.push(SectionBlock {
            kind: SectionKind::Skills,
            title: SectionKind::Skills.title().to_string(),
            spacing: settings.skills_spacing(),
            items: resume
                .skills
                .iter()
                .cloned()
                .map(SectionItem::SkillGroup)
                .collect(),
        });
    }
    if !resume.work_experience.is_empty() {
        sections.push(SectionBlock {
            kind: SectionKind::Experience,
            title: SectionKind::Experience.title().to_string(),
            spacing: settings.experience_spacing(),
            items: resume
                .work_experience
                .iter()
                .cloned()
                .map(SectionItem::Experience)
                .collect(),
        });
    }
    if !resume.projects.is_empty() {
        sections.push(SectionBlock {
            kind: SectionKind::Projects,
            title: SectionKind::Projects.title().to_string(),
            spacing: settings.projects_spacing(),
            items: resume
                .projects
                .iter()
                .cloned()
                .map(SectionItem::Project)
                .collect(),
        });
    }
    if !resume.education.is_empty() {
        sections.push(SectionBlock {
            kind: SectionKind::Education,
            title: SectionKind::Education.title().to_string(),
            spacing: settings.education_spacing(),
            items: resume
                .education
                .iter()
                .cloned()
                .map(SectionItem::Education)
                .collect(),
        });
    }
    if !resume.certifications.is_empty() {
        sections.push(SectionBlock {
            kind: SectionKind::Certifications,
            title: SectionKind::Certifications.title().to_string(),
            // No dedicated settings group exists for certifications; they
            // inherit the education spacing.
            spacing: settings.education_spacing(),
            items: resume
                .certifications
                .iter()
                .cloned()
                .map(SectionItem::Certification)
                .collect(),
        });
    }

    PageTree {
        resume_id: resume.id,
        template,
        variant: style.variant,
        settings,
        header,
        sections,
    }
}

/// Collects present, non-blank contact fields in template order.
fn contact_items(resume: &Resume, order: &[ContactField; 3]) -> Vec<ContactItem> {
    let mut items = Vec::new();
    for field in order {
        let value = match field {
            ContactField::Email => resume.email.as_deref(),
            ContactField::Phone => resume.phone_number.as_deref(),
            ContactField::Location => resume.location.as_deref(),
        };
        let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        let link = match field {
            ContactField::Email => Some(format!("mailto:{text}")),
            _ => None,
        };
        items.push(ContactItem {
            field: *field,
            text: text.to_string(),
            link,
        });
    }
    items
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::DocumentSettings;

    fn sample_resume() -> Resume {
        Resume {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            phone_number: Some("555-0101".to_string()),
            location: Some("London".to_string()),
            skills: vec![SkillGroup {
                category: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "SQL".to_string()],
            }],
            work_experience: vec![WorkExperience {
                position: "Engineer".to_string(),
                company: "Analytical Engines Ltd".to_string(),
                date: "1842 – 1843".to_string(),
                description: vec!["Wrote the first published program".to_string()],
                ..Default::default()
            }],
            education: vec![Education {
                school: "Private tutelage".to_string(),
                degree: "Mathematics".to_string(),
                field: "Analysis".to_string(),
                date: "1833".to_string(),
                location: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_unrecognized_template_renders_as_classic() {
        let resume = sample_resume();
        let fallback = render_page("totally-bogus", &resume);
        let classic = render_page("classic", &resume);
        assert_eq!(fallback.template, TemplateId::Classic);
        assert_eq!(
            serde_json::to_value(&fallback).expect("json"),
            serde_json::to_value(&classic).expect("json"),
        );
    }

    #[test]
    fn test_header_uses_classic_contact_order() {
        let tree = render_page("classic", &sample_resume());
        let fields: Vec<ContactField> = tree
            .header
            .contact_items
            .iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(
            fields,
            vec![ContactField::Location, ContactField::Email, ContactField::Phone]
        );
    }

    #[test]
    fn test_contact_line_no_orphan_separator_when_location_absent() {
        let mut resume = sample_resume();
        resume.location = None;
        let tree = render_page("modern", &resume);
        let line = tree.header.contact_line();
        assert_eq!(line, "ada@example.com • 555-0101");
        assert_eq!(line.matches('•').count(), 1);
    }

    #[test]
    fn test_contact_line_single_field_has_no_separator() {
        let mut resume = sample_resume();
        resume.location = None;
        resume.phone_number = None;
        let tree = render_page("minimal", &resume);
        assert_eq!(tree.header.contact_line(), "ada@example.com");
    }

    #[test]
    fn test_blank_contact_field_treated_as_absent() {
        let mut resume = sample_resume();
        resume.phone_number = Some("   ".to_string());
        let tree = render_page("modern", &resume);
        assert!(tree
            .header
            .contact_items
            .iter()
            .all(|i| i.field != ContactField::Phone));
    }

    #[test]
    fn test_email_item_carries_mailto_link() {
        let tree = render_page("classic", &sample_resume());
        let email = tree
            .header
            .contact_items
            .iter()
            .find(|i| i.field == ContactField::Email)
            .expect("email present");
        assert_eq!(email.link.as_deref(), Some("mailto:ada@example.com"));
    }

    #[test]
    fn test_sections_in_fixed_input_order_empty_omitted() {
        let tree = render_page("classic", &sample_resume());
        let kinds: Vec<SectionKind> = tree.sections.iter().map(|s| s.kind).collect();
        // Projects and certifications are empty in the sample and must not appear.
        assert_eq!(
            kinds,
            vec![SectionKind::Skills, SectionKind::Experience, SectionKind::Education]
        );
    }

    #[test]
    fn test_certifications_inherit_education_spacing() {
        let mut resume = sample_resume();
        resume.certifications = vec![Certification {
            name: "Charter".to_string(),
            provider: "Royal Society".to_string(),
            ..Default::default()
        }];
        let tree = render_page("modern", &resume);
        let certs = tree
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Certifications)
            .expect("certs section");
        assert_eq!(certs.spacing, tree.settings.education_spacing());
    }

    #[test]
    fn test_document_settings_override_template_defaults() {
        let mut resume = sample_resume();
        resume.document_settings = Some(DocumentSettings {
            header_name_size: Some(40.0),
            ..Default::default()
        });
        let tree = render_page("classic", &resume);
        assert_eq!(tree.header.name_size, 40.0);
        // Remaining fields are the classic defaults.
        assert_eq!(tree.settings.document_margin_vertical, 36.0);
    }

    #[test]
    fn test_variant_comes_from_style_table() {
        assert_eq!(
            render_page("professional", &sample_resume()).variant,
            LayoutVariant::Banded
        );
        assert_eq!(
            render_page("minimal", &sample_resume()).variant,
            LayoutVariant::Centered
        );
    }
}
