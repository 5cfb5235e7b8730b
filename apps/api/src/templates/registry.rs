//! Static template catalog and per-template default settings tables.
//!
//! The ten resume templates form a closed set. Each id maps to exactly one
//! total `ResolvedSettings` defaults table and one `TemplateStyle` (layout
//! variant, contact separator glyph, contact field order). All tables are
//! static data — lookup has no side effects.
//!
//! Unknown ids fail fast with `AppError::UnknownTemplate` at the resolve
//! boundary; the render boundary deliberately softens this (see
//! `TemplateId::parse_or_classic`).
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::settings::ResolvedSettings;

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The ten supported resume templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Classic,
    Modern,
    Minimal,
    Professional,
    Creative,
    Executive,
    Tech,
    Academic,
    Bold,
    Elegant,
}

/// Catalog declaration order — meaningful for picker listing only.
pub const ALL_TEMPLATES: [TemplateId; 10] = [
    TemplateId::Classic,
    TemplateId::Modern,
    TemplateId::Minimal,
    TemplateId::Professional,
    TemplateId::Creative,
    TemplateId::Executive,
    TemplateId::Tech,
    TemplateId::Academic,
    TemplateId::Bold,
    TemplateId::Elegant,
];

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::Tech => "tech",
            TemplateId::Academic => "academic",
            TemplateId::Bold => "bold",
            TemplateId::Elegant => "elegant",
        }
    }

    /// Render-boundary leniency: an unrecognized id falls back to Classic so
    /// a resume always produces some document. This is the one sanctioned
    /// exception to the fail-fast rule enforced by `FromStr`.
    pub fn parse_or_classic(id: &str) -> TemplateId {
        match TemplateId::from_str(id) {
            Ok(t) => t,
            Err(_) => {
                tracing::warn!("unrecognized template '{id}', rendering as classic");
                TemplateId::Classic
            }
        }
    }

    /// Returns this template's total defaults table.
    pub fn defaults(&self) -> &'static ResolvedSettings {
        match self {
            TemplateId::Classic => &CLASSIC_DEFAULTS,
            TemplateId::Modern => &MODERN_DEFAULTS,
            TemplateId::Minimal => &MINIMAL_DEFAULTS,
            TemplateId::Professional => &PROFESSIONAL_DEFAULTS,
            TemplateId::Creative => &CREATIVE_DEFAULTS,
            TemplateId::Executive => &EXECUTIVE_DEFAULTS,
            TemplateId::Tech => &TECH_DEFAULTS,
            TemplateId::Academic => &ACADEMIC_DEFAULTS,
            TemplateId::Bold => &BOLD_DEFAULTS,
            TemplateId::Elegant => &ELEGANT_DEFAULTS,
        }
    }

    /// Returns this template's layout style (variant, separator, contact order).
    pub fn style(&self) -> &'static TemplateStyle {
        match self {
            TemplateId::Classic => &CLASSIC_STYLE,
            TemplateId::Modern => &MODERN_STYLE,
            TemplateId::Minimal => &MINIMAL_STYLE,
            TemplateId::Professional => &PROFESSIONAL_STYLE,
            TemplateId::Creative => &CREATIVE_STYLE,
            TemplateId::Executive => &EXECUTIVE_STYLE,
            TemplateId::Tech => &TECH_STYLE,
            TemplateId::Academic => &ACADEMIC_STYLE,
            TemplateId::Bold => &BOLD_STYLE,
            TemplateId::Elegant => &ELEGANT_STYLE,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "minimal" => Ok(TemplateId::Minimal),
            "professional" => Ok(TemplateId::Professional),
            "creative" => Ok(TemplateId::Creative),
            "executive" => Ok(TemplateId::Executive),
            "tech" => Ok(TemplateId::Tech),
            "academic" => Ok(TemplateId::Academic),
            "bold" => Ok(TemplateId::Bold),
            "elegant" => Ok(TemplateId::Elegant),
            other => Err(AppError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Strict registry lookup — fails with `UnknownTemplate` on an id outside
/// the closed set. Used by the resolve boundary and the defaults endpoint.
pub fn defaults_for(id: &str) -> Result<&'static ResolvedSettings, AppError> {
    Ok(TemplateId::from_str(id)?.defaults())
}

// ────────────────────────────────────────────────────────────────────────────
// Layout styles
// ────────────────────────────────────────────────────────────────────────────

/// How the parameterized renderer lays out the header block.
/// Ten templates share five variants; the defaults tables carry the rest of
/// each template's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// Name over a full-width rule (classic, executive, academic).
    Underlined,
    /// Tinted band with a left accent bar (modern).
    AccentBar,
    /// Centered name and contact line (minimal, elegant).
    Centered,
    /// Solid band behind the header (professional, bold).
    Banded,
    /// Header enclosed in a border frame (creative, tech).
    Framed,
}

/// A contact field slot in the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    Phone,
    Location,
}

/// Per-template layout parameters consumed by the renderer.
pub struct TemplateStyle {
    pub variant: LayoutVariant,
    /// Glyph placed between present contact fields.
    pub separator: &'static str,
    /// Header contact line order. Absent fields are skipped without leaving
    /// an orphan separator.
    pub contact_order: [ContactField; 3],
}

use ContactField::{Email, Location, Phone};

static CLASSIC_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Underlined,
    separator: "•",
    contact_order: [Location, Email, Phone],
};

static MODERN_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::AccentBar,
    separator: "•",
    contact_order: [Email, Phone, Location],
};

static MINIMAL_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Centered,
    separator: "|",
    contact_order: [Email, Phone, Location],
};

static PROFESSIONAL_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Banded,
    separator: "|",
    contact_order: [Email, Phone, Location],
};

static CREATIVE_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Framed,
    separator: "✦",
    contact_order: [Email, Phone, Location],
};

static EXECUTIVE_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Underlined,
    separator: "—",
    contact_order: [Location, Email, Phone],
};

static TECH_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Framed,
    separator: "/",
    contact_order: [Email, Phone, Location],
};

static ACADEMIC_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Underlined,
    separator: "·",
    contact_order: [Location, Email, Phone],
};

static BOLD_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Banded,
    separator: "•",
    contact_order: [Email, Phone, Location],
};

static ELEGANT_STYLE: TemplateStyle = TemplateStyle {
    variant: LayoutVariant::Centered,
    separator: "·",
    contact_order: [Location, Email, Phone],
};

// ────────────────────────────────────────────────────────────────────────────
// Catalog metadata
// ────────────────────────────────────────────────────────────────────────────

/// One picker entry. `features` are short UI tags, not semantics.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub features: [&'static str; 3],
}

/// The picker catalog in fixed declaration order.
pub static CATALOG: [TemplateInfo; 10] = [
    TemplateInfo {
        id: TemplateId::Classic,
        display_name: "Classic",
        description: "Traditional professional layout with clean lines",
        preview: "📄",
        features: ["Professional", "ATS-friendly", "Traditional"],
    },
    TemplateInfo {
        id: TemplateId::Modern,
        display_name: "Modern",
        description: "Contemporary design with accent colors",
        preview: "✨",
        features: ["Stylish", "Eye-catching", "Modern spacing"],
    },
    TemplateInfo {
        id: TemplateId::Minimal,
        display_name: "Minimal",
        description: "Ultra-clean minimalist design",
        preview: "⚪",
        features: ["Simple", "Centered layout", "Lots of whitespace"],
    },
    TemplateInfo {
        id: TemplateId::Professional,
        display_name: "Professional",
        description: "Polished corporate style",
        preview: "💼",
        features: ["Corporate", "Structured", "Business-focused"],
    },
    TemplateInfo {
        id: TemplateId::Creative,
        display_name: "Creative",
        description: "Bold design for creative roles",
        preview: "🎨",
        features: ["Bold", "Colorful", "Stand out"],
    },
    TemplateInfo {
        id: TemplateId::Executive,
        display_name: "Executive",
        description: "Elegant and sophisticated for leadership roles",
        preview: "👔",
        features: ["Elegant", "Sophisticated", "Leadership-focused"],
    },
    TemplateInfo {
        id: TemplateId::Tech,
        display_name: "Tech",
        description: "Modern tech industry design with clean aesthetics",
        preview: "💻",
        features: ["Tech-focused", "Clean", "Innovative"],
    },
    TemplateInfo {
        id: TemplateId::Academic,
        display_name: "Academic",
        description: "Scholarly design perfect for research and education",
        preview: "🎓",
        features: ["Scholarly", "Formal", "Research-oriented"],
    },
    TemplateInfo {
        id: TemplateId::Bold,
        display_name: "Bold",
        description: "Strong, impactful design that commands attention",
        preview: "🔥",
        features: ["Bold", "Impactful", "Attention-grabbing"],
    },
    TemplateInfo {
        id: TemplateId::Elegant,
        display_name: "Elegant",
        description: "Refined and graceful design with premium feel",
        preview: "✨",
        features: ["Refined", "Graceful", "Premium"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Per-template defaults tables (total — every settings field has a value)
// ────────────────────────────────────────────────────────────────────────────

/// Classic — traditional spacing on US letter.
static CLASSIC_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.5,
    document_margin_vertical: 36.0,
    document_margin_horizontal: 36.0,
    header_name_size: 24.0,
    header_name_bottom_spacing: 24.0,
    skills_margin_top: 2.0,
    skills_margin_bottom: 2.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.0,
    experience_margin_top: 2.0,
    experience_margin_bottom: 2.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 4.0,
    projects_margin_top: 2.0,
    projects_margin_bottom: 2.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 4.0,
    education_margin_top: 2.0,
    education_margin_bottom: 2.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 4.0,
};

/// Modern — wider horizontal margins, looser line height and section spacing.
static MODERN_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.6,
    document_margin_vertical: 32.0,
    document_margin_horizontal: 40.0,
    header_name_size: 28.0,
    header_name_bottom_spacing: 28.0,
    skills_margin_top: 4.0,
    skills_margin_bottom: 4.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 3.0,
    experience_margin_top: 6.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 6.0,
    projects_margin_top: 6.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 6.0,
    education_margin_top: 6.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 6.0,
};

/// Minimal — generous whitespace, centered header.
static MINIMAL_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.6,
    document_margin_vertical: 40.0,
    document_margin_horizontal: 40.0,
    header_name_size: 26.0,
    header_name_bottom_spacing: 32.0,
    skills_margin_top: 4.0,
    skills_margin_bottom: 4.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 3.0,
    experience_margin_top: 6.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 5.0,
    projects_margin_top: 6.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 5.0,
    education_margin_top: 6.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 5.0,
};

/// Professional — structured corporate spacing.
static PROFESSIONAL_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.5,
    document_margin_vertical: 36.0,
    document_margin_horizontal: 40.0,
    header_name_size: 26.0,
    header_name_bottom_spacing: 24.0,
    skills_margin_top: 3.0,
    skills_margin_bottom: 3.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.0,
    experience_margin_top: 4.0,
    experience_margin_bottom: 3.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 5.0,
    projects_margin_top: 4.0,
    projects_margin_bottom: 3.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 5.0,
    education_margin_top: 4.0,
    education_margin_bottom: 3.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 5.0,
};

/// Creative — large name, loose spacing.
static CREATIVE_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.6,
    document_margin_vertical: 32.0,
    document_margin_horizontal: 36.0,
    header_name_size: 30.0,
    header_name_bottom_spacing: 26.0,
    skills_margin_top: 4.0,
    skills_margin_bottom: 4.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 3.0,
    experience_margin_top: 6.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 6.0,
    projects_margin_top: 6.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 6.0,
    education_margin_top: 6.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 6.0,
};

/// Executive — slightly larger type, wide margins.
static EXECUTIVE_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.5,
    document_line_height: 1.5,
    document_margin_vertical: 40.0,
    document_margin_horizontal: 44.0,
    header_name_size: 28.0,
    header_name_bottom_spacing: 28.0,
    skills_margin_top: 3.0,
    skills_margin_bottom: 3.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.0,
    experience_margin_top: 6.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 5.0,
    projects_margin_top: 6.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 5.0,
    education_margin_top: 6.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 5.0,
};

/// Tech — dense, compact layout.
static TECH_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 9.5,
    document_line_height: 1.45,
    document_margin_vertical: 32.0,
    document_margin_horizontal: 36.0,
    header_name_size: 24.0,
    header_name_bottom_spacing: 20.0,
    skills_margin_top: 3.0,
    skills_margin_bottom: 3.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.0,
    experience_margin_top: 4.0,
    experience_margin_bottom: 3.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 4.0,
    projects_margin_top: 4.0,
    projects_margin_bottom: 3.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 4.0,
    education_margin_top: 4.0,
    education_margin_bottom: 3.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 4.0,
};

/// Academic — wide scholarly margins, restrained header.
static ACADEMIC_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.5,
    document_margin_vertical: 48.0,
    document_margin_horizontal: 48.0,
    header_name_size: 22.0,
    header_name_bottom_spacing: 20.0,
    skills_margin_top: 2.0,
    skills_margin_bottom: 2.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.0,
    experience_margin_top: 4.0,
    experience_margin_bottom: 3.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 4.0,
    projects_margin_top: 4.0,
    projects_margin_bottom: 3.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 4.0,
    education_margin_top: 4.0,
    education_margin_bottom: 3.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 4.0,
};

/// Bold — oversized name, tight page margins.
static BOLD_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.5,
    document_margin_vertical: 28.0,
    document_margin_horizontal: 32.0,
    header_name_size: 32.0,
    header_name_bottom_spacing: 24.0,
    skills_margin_top: 4.0,
    skills_margin_bottom: 4.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 3.0,
    experience_margin_top: 5.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 5.0,
    projects_margin_top: 5.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 5.0,
    education_margin_top: 5.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 5.0,
};

/// Elegant — airy margins, centered refined header.
static ELEGANT_DEFAULTS: ResolvedSettings = ResolvedSettings {
    document_font_size: 10.0,
    document_line_height: 1.6,
    document_margin_vertical: 44.0,
    document_margin_horizontal: 44.0,
    header_name_size: 26.0,
    header_name_bottom_spacing: 30.0,
    skills_margin_top: 3.0,
    skills_margin_bottom: 3.0,
    skills_margin_horizontal: 0.0,
    skills_item_spacing: 2.5,
    experience_margin_top: 5.0,
    experience_margin_bottom: 4.0,
    experience_margin_horizontal: 0.0,
    experience_item_spacing: 5.0,
    projects_margin_top: 5.0,
    projects_margin_bottom: 4.0,
    projects_margin_horizontal: 0.0,
    projects_item_spacing: 5.0,
    education_margin_top: 5.0,
    education_margin_bottom: 4.0,
    education_margin_horizontal: 0.0,
    education_item_spacing: 5.0,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
