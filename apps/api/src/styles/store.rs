//! Saved-styles collection: named settings snapshots persisted under one
//! fixed key, seeded with three built-in presets the first time the store is
//! empty.
//!
//! Error policy: persisted data that fails to parse is treated the same as
//! absent data — log, reseed, carry on. Styling state must never block the
//! editor. Write failures do propagate, since losing a user's explicit save
//! silently is worse than surfacing it.

use anyhow::Result;
use chrono::Utc;
use tracing::warn;

use crate::models::settings::{DocumentSettings, SavedStyle};
use crate::styles::kv::KvStore;

/// Fixed persistence key, carried over from the browser localStorage era.
pub const STYLES_KEY: &str = "persona-saved-styles";

pub struct StyleStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> StyleStore<S> {
    pub fn new(kv: S) -> Self {
        StyleStore { kv }
    }

    /// Returns all saved styles in save order, seeding the built-in presets
    /// when the persisted collection is absent, unparseable, or empty.
    /// A non-empty collection is returned as-is and never reseeded.
    pub fn load_all(&mut self) -> Result<Vec<SavedStyle>> {
        if let Some(raw) = self.kv.get(STYLES_KEY) {
            match serde_json::from_str::<Vec<SavedStyle>>(&raw) {
                Ok(styles) if !styles.is_empty() => return Ok(styles),
                Ok(_) => {}
                Err(e) => warn!("corrupt saved-styles data, reseeding defaults: {e}"),
            }
        }
        let defaults = builtin_styles();
        self.persist(&defaults)?;
        Ok(defaults)
    }

    /// Captures `settings` under `name` with a fresh identity timestamp and
    /// appends it to the collection. The caller passes fully-resolved
    /// settings; the store does not re-resolve.
    pub fn save(&mut self, name: &str, settings: DocumentSettings) -> Result<SavedStyle> {
        let name = name.trim();
        anyhow::ensure!(!name.is_empty(), "style name must not be empty");

        let mut styles = self.load_all()?;
        let style = SavedStyle {
            name: name.to_string(),
            settings,
            timestamp: next_timestamp(&styles),
        };
        styles.push(style.clone());
        self.persist(&styles)?;
        Ok(style)
    }

    /// Removes the style with the given identity timestamp. Unknown
    /// timestamps are a no-op.
    pub fn delete(&mut self, timestamp: i64) -> Result<()> {
        let mut styles = self.load_all()?;
        let before = styles.len();
        styles.retain(|s| s.timestamp != timestamp);
        if styles.len() != before {
            self.persist(&styles)?;
        }
        Ok(())
    }

    fn persist(&mut self, styles: &[SavedStyle]) -> Result<()> {
        let raw = serde_json::to_string(styles)?;
        self.kv.set(STYLES_KEY, &raw)
    }
}

/// Fresh identity timestamp: wall-clock milliseconds, bumped past the newest
/// existing entry so identities stay unique and strictly monotonic even when
/// two saves land in the same millisecond.
fn next_timestamp(existing: &[SavedStyle]) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.iter().map(|s| s.timestamp).max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}

/// The three built-in presets, matching the product's shipped styles.
/// Staggered timestamps keep their identities distinct and ordered.
fn builtin_styles() -> Vec<SavedStyle> {
    let now = Utc::now().timestamp_millis();
    vec![
        SavedStyle {
            name: "Basic".to_string(),
            timestamp: now - 3,
            settings: DocumentSettings {
                document_font_size: Some(10.0),
                document_line_height: Some(1.5),
                document_margin_vertical: Some(36.0),
                document_margin_horizontal: Some(36.0),
                header_name_size: Some(24.0),
                header_name_bottom_spacing: Some(24.0),
                skills_margin_top: Some(2.0),
                skills_margin_bottom: Some(2.0),
                skills_margin_horizontal: Some(0.0),
                skills_item_spacing: Some(2.0),
                experience_margin_top: Some(2.0),
                experience_margin_bottom: Some(2.0),
                experience_margin_horizontal: Some(0.0),
                experience_item_spacing: Some(4.0),
                projects_margin_top: Some(2.0),
                projects_margin_bottom: Some(2.0),
                projects_margin_horizontal: Some(0.0),
                projects_item_spacing: Some(4.0),
                education_margin_top: Some(2.0),
                education_margin_bottom: Some(2.0),
                education_margin_horizontal: Some(0.0),
                education_item_spacing: Some(4.0),
            },
        },
        SavedStyle {
            name: "Modern Design".to_string(),
            timestamp: now - 2,
            settings: DocumentSettings {
                document_font_size: Some(10.0),
                document_line_height: Some(1.6),
                document_margin_vertical: Some(32.0),
                document_margin_horizontal: Some(40.0),
                header_name_size: Some(28.0),
                header_name_bottom_spacing: Some(28.0),
                skills_margin_top: Some(4.0),
                skills_margin_bottom: Some(4.0),
                skills_margin_horizontal: Some(0.0),
                skills_item_spacing: Some(3.0),
                experience_margin_top: Some(6.0),
                experience_margin_bottom: Some(4.0),
                experience_margin_horizontal: Some(0.0),
                experience_item_spacing: Some(6.0),
                projects_margin_top: Some(6.0),
                projects_margin_bottom: Some(4.0),
                projects_margin_horizontal: Some(0.0),
                projects_item_spacing: Some(6.0),
                education_margin_top: Some(6.0),
                education_margin_bottom: Some(4.0),
                education_margin_horizontal: Some(0.0),
                education_item_spacing: Some(6.0),
            },
        },
        SavedStyle {
            name: "Compact Color".to_string(),
            timestamp: now - 1,
            settings: DocumentSettings {
                document_font_size: Some(9.0),
                document_line_height: Some(1.4),
                document_margin_vertical: Some(28.0),
                document_margin_horizontal: Some(32.0),
                header_name_size: Some(26.0),
                header_name_bottom_spacing: Some(20.0),
                skills_margin_top: Some(3.0),
                skills_margin_bottom: Some(3.0),
                skills_margin_horizontal: Some(0.0),
                skills_item_spacing: Some(2.5),
                experience_margin_top: Some(4.0),
                experience_margin_bottom: Some(3.0),
                experience_margin_horizontal: Some(0.0),
                experience_item_spacing: Some(5.0),
                projects_margin_top: Some(4.0),
                projects_margin_bottom: Some(3.0),
                projects_margin_horizontal: Some(0.0),
                projects_item_spacing: Some(5.0),
                education_margin_top: Some(4.0),
                education_margin_bottom: Some(3.0),
                education_margin_horizontal: Some(0.0),
                education_item_spacing: Some(5.0),
            },
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::kv::MemoryKvStore;
    use crate::templates::registry::TemplateId;

    fn store() -> StyleStore<MemoryKvStore> {
        StyleStore::new(MemoryKvStore::new())
    }

    fn resolved_settings() -> DocumentSettings {
        TemplateId::Classic.defaults().clone().into()
    }

    #[test]
    fn test_empty_store_seeds_three_builtin_presets() {
        let mut store = store();
        let styles = store.load_all().expect("load");
        let names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Basic", "Modern Design", "Compact Color"]);
    }

    #[test]
    fn test_second_load_does_not_reseed() {
        let mut store = store();
        let first = store.load_all().expect("load");
        let second = store.load_all().expect("load");
        assert_eq!(first, second);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_corrupt_data_reseeds_defaults() {
        let mut kv = MemoryKvStore::new();
        kv.set(STYLES_KEY, "{not json at all").expect("set");
        let mut store = StyleStore::new(kv);
        let styles = store.load_all().expect("load");
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].name, "Basic");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = store();
        let seeded = store.load_all().expect("load");
        let saved = store.save("My Style", resolved_settings()).expect("save");

        let styles = store.load_all().expect("load");
        assert_eq!(styles.len(), 4);
        let found = styles.iter().find(|s| s.timestamp == saved.timestamp).expect("saved entry");
        assert_eq!(found.name, "My Style");
        assert_eq!(found.settings, resolved_settings());
        assert!(
            seeded.iter().all(|s| s.timestamp != saved.timestamp),
            "fresh timestamp must not collide with seeds"
        );
    }

    #[test]
    fn test_saved_styles_append_in_order() {
        let mut store = store();
        store.save("A", resolved_settings()).expect("save");
        store.save("B", resolved_settings()).expect("save");
        let styles = store.load_all().expect("load");
        let names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Basic", "Modern Design", "Compact Color", "A", "B"]);
    }

    #[test]
    fn test_timestamps_strictly_monotonic_same_millisecond() {
        let mut store = store();
        let a = store.save("A", resolved_settings()).expect("save");
        let b = store.save("B", resolved_settings()).expect("save");
        let c = store.save("C", resolved_settings()).expect("save");
        assert!(a.timestamp < b.timestamp && b.timestamp < c.timestamp);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut store = store();
        let a = store.save("Same", resolved_settings()).expect("save");
        let b = store.save("Same", resolved_settings()).expect("save");
        assert_ne!(a.timestamp, b.timestamp);
        let styles = store.load_all().expect("load");
        assert_eq!(styles.iter().filter(|s| s.name == "Same").count(), 2);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut store = store();
        assert!(store.save("   ", resolved_settings()).is_err());
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut store = store();
        let saved = store.save("Doomed", resolved_settings()).expect("save");
        store.delete(saved.timestamp).expect("delete");
        let styles = store.load_all().expect("load");
        assert!(styles.iter().all(|s| s.timestamp != saved.timestamp));
    }

    #[test]
    fn test_delete_unknown_timestamp_is_noop() {
        let mut store = store();
        let before = store.load_all().expect("load");
        store.delete(123456789).expect("idempotent");
        assert_eq!(store.load_all().expect("load"), before);
    }

    #[test]
    fn test_deleting_all_styles_reseeds_on_next_load() {
        // Persisted non-empty state wins over defaults, but a fully-emptied
        // collection is indistinguishable from a fresh store.
        let mut store = store();
        let styles = store.load_all().expect("load");
        for s in styles {
            store.delete(s.timestamp).expect("delete");
        }
        let reloaded = store.load_all().expect("load");
        assert_eq!(reloaded.len(), 3);
    }
}
