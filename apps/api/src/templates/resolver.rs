//! Style resolver — the single place settings optionality is eliminated.
//!
//! Layering: template defaults < document-level overrides. The merge is
//! field-independent and total: every field of the output is populated, so a
//! renderer can never observe a partially-resolved settings object.
//!
//! Leniency policy: a present override outside its numeric domain (negative,
//! NaN, infinite) is treated as absent and falls back to the default. Bad
//! persisted data degrades to the template's look instead of blocking
//! rendering. The only hard failure here is an unknown template id.

use crate::errors::AppError;
use crate::models::settings::{DocumentSettings, ResolvedSettings};
use crate::templates::registry::{defaults_for, TemplateId};

/// Resolves a possibly-partial settings object against a template's defaults.
///
/// Fails with `UnknownTemplate` if `template_id` is outside the registry;
/// never fails on malformed overrides.
pub fn resolve(template_id: &str, overrides: &DocumentSettings) -> Result<ResolvedSettings, AppError> {
    let defaults = defaults_for(template_id)?;
    Ok(merge(overrides, defaults))
}

/// Same merge for an already-parsed id — used by the render path after its
/// fallback decision has been made.
pub fn resolve_for(template: TemplateId, overrides: &DocumentSettings) -> ResolvedSettings {
    merge(overrides, template.defaults())
}

/// Picks the override when present and within domain, else the default.
fn pick(field: &'static str, over: Option<f32>, default: f32) -> f32 {
    match over {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            tracing::debug!("invalid settings field {field}={v}, using default {default}");
            default
        }
        None => default,
    }
}

fn merge(over: &DocumentSettings, def: &ResolvedSettings) -> ResolvedSettings {
    ResolvedSettings {
        document_font_size: pick(
            "document_font_size",
            over.document_font_size,
            def.document_font_size,
        ),
        document_line_height: pick(
            "document_line_height",
            over.document_line_height,
            def.document_line_height,
        ),
        document_margin_vertical: pick(
            "document_margin_vertical",
            over.document_margin_vertical,
            def.document_margin_vertical,
        ),
        document_margin_horizontal: pick(
            "document_margin_horizontal",
            over.document_margin_horizontal,
            def.document_margin_horizontal,
        ),
        header_name_size: pick("header_name_size", over.header_name_size, def.header_name_size),
        header_name_bottom_spacing: pick(
            "header_name_bottom_spacing",
            over.header_name_bottom_spacing,
            def.header_name_bottom_spacing,
        ),
        skills_margin_top: pick(
            "skills_margin_top",
            over.skills_margin_top,
            def.skills_margin_top,
        ),
        skills_margin_bottom: pick(
            "skills_margin_bottom",
            over.skills_margin_bottom,
            def.skills_margin_bottom,
        ),
        skills_margin_horizontal: pick(
            "skills_margin_horizontal",
            over.skills_margin_horizontal,
            def.skills_margin_horizontal,
        ),
        skills_item_spacing: pick(
            "skills_item_spacing",
            over.skills_item_spacing,
            def.skills_item_spacing,
        ),
        experience_margin_top: pick(
            "experience_margin_top",
            over.experience_margin_top,
            def.experience_margin_top,
        ),
        experience_margin_bottom: pick(
            "experience_margin_bottom",
            over.experience_margin_bottom,
            def.experience_margin_bottom,
        ),
        experience_margin_horizontal: pick(
            "experience_margin_horizontal",
            over.experience_margin_horizontal,
            def.experience_margin_horizontal,
        ),
        experience_item_spacing: pick(
            "experience_item_spacing",
            over.experience_item_spacing,
            def.experience_item_spacing,
        ),
        projects_margin_top: pick(
            "projects_margin_top",
            over.projects_margin_top,
            def.projects_margin_top,
        ),
        projects_margin_bottom: pick(
            "projects_margin_bottom",
            over.projects_margin_bottom,
            def.projects_margin_bottom,
        ),
        projects_margin_horizontal: pick(
            "projects_margin_horizontal",
            over.projects_margin_horizontal,
            def.projects_margin_horizontal,
        ),
        projects_item_spacing: pick(
            "projects_item_spacing",
            over.projects_item_spacing,
            def.projects_item_spacing,
        ),
        education_margin_top: pick(
            "education_margin_top",
            over.education_margin_top,
            def.education_margin_top,
        ),
        education_margin_bottom: pick(
            "education_margin_bottom",
            over.education_margin_bottom,
            def.education_margin_bottom,
        ),
        education_margin_horizontal: pick(
            "education_margin_horizontal",
            over.education_margin_horizontal,
            def.education_margin_horizontal,
        ),
        education_item_spacing: pick(
            "education_item_spacing",
            over.education_item_spacing,
            def.education_item_spacing,
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry::ALL_TEMPLATES;

    #[test]
    fn test_empty_overrides_yield_template_defaults() {
        for t in ALL_TEMPLATES {
            let resolved = resolve(t.as_str(), &DocumentSettings::default()).expect("known id");
            assert_eq!(&resolved, t.defaults(), "{t} defaults should pass through");
        }
    }

    #[test]
    fn test_present_override_wins_over_default() {
        let overrides = DocumentSettings {
            document_font_size: Some(12.5),
            header_name_size: Some(30.0),
            ..Default::default()
        };
        let resolved = resolve("classic", &overrides).expect("classic");
        assert_eq!(resolved.document_font_size, 12.5);
        assert_eq!(resolved.header_name_size, 30.0);
        // Untouched fields keep the classic defaults.
        assert_eq!(resolved.document_margin_vertical, 36.0);
    }

    #[test]
    fn test_negative_override_falls_back_to_default() {
        let overrides = DocumentSettings {
            document_font_size: Some(-5.0),
            ..Default::default()
        };
        let resolved = resolve("classic", &overrides).expect("classic");
        assert_eq!(resolved.document_font_size, 10.0);
    }

    #[test]
    fn test_nan_and_infinite_overrides_fall_back() {
        let overrides = DocumentSettings {
            document_line_height: Some(f32::NAN),
            document_margin_vertical: Some(f32::INFINITY),
            ..Default::default()
        };
        let resolved = resolve("modern", &overrides).expect("modern");
        assert_eq!(resolved.document_line_height, 1.6);
        assert_eq!(resolved.document_margin_vertical, 32.0);
    }

    #[test]
    fn test_zero_is_a_valid_override() {
        let overrides = DocumentSettings {
            skills_margin_top: Some(0.0),
            ..Default::default()
        };
        let resolved = resolve("modern", &overrides).expect("modern");
        assert_eq!(resolved.skills_margin_top, 0.0);
    }

    #[test]
    fn test_unknown_template_fails() {
        let err = resolve("bogus", &DocumentSettings::default()).unwrap_err();
        assert!(matches!(err, AppError::UnknownTemplate(_)));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let overrides = DocumentSettings {
            document_font_size: Some(11.0),
            experience_item_spacing: Some(7.0),
            ..Default::default()
        };
        let once = resolve("tech", &overrides).expect("tech");
        let twice = resolve("tech", &once.clone().into()).expect("tech");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_totality_resolved_values_within_domain() {
        let hostile = DocumentSettings {
            document_font_size: Some(-1.0),
            document_line_height: Some(f32::NEG_INFINITY),
            skills_item_spacing: Some(f32::NAN),
            projects_margin_top: Some(9.0),
            ..Default::default()
        };
        for t in ALL_TEMPLATES {
            let resolved = resolve(t.as_str(), &hostile).expect("known id");
            let json = serde_json::to_value(&resolved).expect("serialize");
            for (field, value) in json.as_object().expect("object") {
                let v = value.as_f64().expect("numeric");
                assert!(v.is_finite() && v >= 0.0, "{t}.{field} = {v}");
            }
            assert_eq!(resolved.projects_margin_top, 9.0);
        }
    }
}
