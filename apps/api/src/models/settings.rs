//! Document styling settings and user-saved style snapshots.
//!
//! `DocumentSettings` is the partial, override form every caller hands us:
//! each field is optional and "absent" means "use the template default".
//! `ResolvedSettings` is the total form that renderers consume — the style
//! resolver is the only place optionality is eliminated.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Partial styling overrides attached to a resume (or submitted by the editor).
///
/// All values are points except `document_line_height` (a multiplier).
/// A present value must be finite and non-negative; the resolver treats
/// anything else as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub document_font_size: Option<f32>,
    pub document_line_height: Option<f32>,
    pub document_margin_vertical: Option<f32>,
    pub document_margin_horizontal: Option<f32>,

    pub header_name_size: Option<f32>,
    pub header_name_bottom_spacing: Option<f32>,

    pub skills_margin_top: Option<f32>,
    pub skills_margin_bottom: Option<f32>,
    pub skills_margin_horizontal: Option<f32>,
    pub skills_item_spacing: Option<f32>,

    pub experience_margin_top: Option<f32>,
    pub experience_margin_bottom: Option<f32>,
    pub experience_margin_horizontal: Option<f32>,
    pub experience_item_spacing: Option<f32>,

    pub projects_margin_top: Option<f32>,
    pub projects_margin_bottom: Option<f32>,
    pub projects_margin_horizontal: Option<f32>,
    pub projects_item_spacing: Option<f32>,

    pub education_margin_top: Option<f32>,
    pub education_margin_bottom: Option<f32>,
    pub education_margin_horizontal: Option<f32>,
    pub education_item_spacing: Option<f32>,
}

/// Fully-populated settings — what a renderer actually consumes.
///
/// Produced exclusively by `templates::resolver::resolve`; the per-template
/// default tables in `templates::registry` are values of this type, which
/// guarantees no template ships partial defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSettings {
    pub document_font_size: f32,
    pub document_line_height: f32,
    pub document_margin_vertical: f32,
    pub document_margin_horizontal: f32,

    pub header_name_size: f32,
    pub header_name_bottom_spacing: f32,

    pub skills_margin_top: f32,
    pub skills_margin_bottom: f32,
    pub skills_margin_horizontal: f32,
    pub skills_item_spacing: f32,

    pub experience_margin_top: f32,
    pub experience_margin_bottom: f32,
    pub experience_margin_horizontal: f32,
    pub experience_item_spacing: f32,

    pub projects_margin_top: f32,
    pub projects_margin_bottom: f32,
    pub projects_margin_horizontal: f32,
    pub projects_item_spacing: f32,

    pub education_margin_top: f32,
    pub education_margin_bottom: f32,
    pub education_margin_horizontal: f32,
    pub education_item_spacing: f32,
}

/// Spacing group for one content section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSpacing {
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_horizontal: f32,
    pub item_spacing: f32,
}

impl ResolvedSettings {
    pub fn skills_spacing(&self) -> SectionSpacing {
        SectionSpacing {
            margin_top: self.skills_margin_top,
            margin_bottom: self.skills_margin_bottom,
            margin_horizontal: self.skills_margin_horizontal,
            item_spacing: self.skills_item_spacing,
        }
    }

    pub fn experience_spacing(&self) -> SectionSpacing {
        SectionSpacing {
            margin_top: self.experience_margin_top,
            margin_bottom: self.experience_margin_bottom,
            margin_horizontal: self.experience_margin_horizontal,
            item_spacing: self.experience_item_spacing,
        }
    }

    pub fn projects_spacing(&self) -> SectionSpacing {
        SectionSpacing {
            margin_top: self.projects_margin_top,
            margin_bottom: self.projects_margin_bottom,
            margin_horizontal: self.projects_margin_horizontal,
            item_spacing: self.projects_item_spacing,
        }
    }

    pub fn education_spacing(&self) -> SectionSpacing {
        SectionSpacing {
            margin_top: self.education_margin_top,
            margin_bottom: self.education_margin_bottom,
            margin_horizontal: self.education_margin_horizontal,
            item_spacing: self.education_item_spacing,
        }
    }
}

impl From<ResolvedSettings> for DocumentSettings {
    /// Converts back into the override form with every field present.
    /// Used when persisting a resolved snapshot as a `SavedStyle` and when
    /// re-resolving already-resolved settings.
    fn from(r: ResolvedSettings) -> Self {
        DocumentSettings {
            document_font_size: Some(r.document_font_size),
            document_line_height: Some(r.document_line_height),
            document_margin_vertical: Some(r.document_margin_vertical),
            document_margin_horizontal: Some(r.document_margin_horizontal),
            header_name_size: Some(r.header_name_size),
            header_name_bottom_spacing: Some(r.header_name_bottom_spacing),
            skills_margin_top: Some(r.skills_margin_top),
            skills_margin_bottom: Some(r.skills_margin_bottom),
            skills_margin_horizontal: Some(r.skills_margin_horizontal),
            skills_item_spacing: Some(r.skills_item_spacing),
            experience_margin_top: Some(r.experience_margin_top),
            experience_margin_bottom: Some(r.experience_margin_bottom),
            experience_margin_horizontal: Some(r.experience_margin_horizontal),
            experience_item_spacing: Some(r.experience_item_spacing),
            projects_margin_top: Some(r.projects_margin_top),
            projects_margin_bottom: Some(r.projects_margin_bottom),
            projects_margin_horizontal: Some(r.projects_margin_horizontal),
            projects_item_spacing: Some(r.projects_item_spacing),
            education_margin_top: Some(r.education_margin_top),
            education_margin_bottom: Some(r.education_margin_bottom),
            education_margin_horizontal: Some(r.education_margin_horizontal),
            education_item_spacing: Some(r.education_item_spacing),
        }
    }
}

/// A user-named snapshot of previously resolved settings.
///
/// `timestamp` (epoch milliseconds) is the identity key — unique and strictly
/// monotonic within one store. Names are free-form and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedStyle {
    pub name: String,
    pub settings: DocumentSettings,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry::TemplateId;

    #[test]
    fn test_default_settings_all_absent() {
        let s = DocumentSettings::default();
        assert_eq!(s.document_font_size, None);
        assert_eq!(s.education_item_spacing, None);
    }

    #[test]
    fn test_resolved_round_trips_into_overrides() {
        let resolved = TemplateId::Classic.defaults().clone();
        let overrides: DocumentSettings = resolved.clone().into();
        assert_eq!(
            overrides.document_font_size,
            Some(resolved.document_font_size)
        );
        assert_eq!(
            overrides.education_item_spacing,
            Some(resolved.education_item_spacing)
        );
    }

    #[test]
    fn test_partial_settings_deserialize_with_missing_fields() {
        let s: DocumentSettings =
            serde_json::from_str(r#"{"document_font_size": 11}"#).expect("partial json");
        assert_eq!(s.document_font_size, Some(11.0));
        assert_eq!(s.document_line_height, None);
    }

    #[test]
    fn test_section_spacing_accessors() {
        let resolved = TemplateId::Modern.defaults();
        let sp = resolved.skills_spacing();
        assert_eq!(sp.margin_top, resolved.skills_margin_top);
        assert_eq!(sp.item_spacing, resolved.skills_item_spacing);
    }
}
