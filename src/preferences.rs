//! Dietary preferences.
//!
//! The structured form mirrors the checkboxes on the user surface; the
//! recommendation engine only ever sees the flattened free-text form.

use serde::{Deserialize, Serialize};

/// A user's dietary preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSet {
    /// Vegan meals only.
    pub vegan: bool,
    /// High-protein, athlete-oriented options.
    pub athlete: bool,
    /// Gluten-free options.
    pub gluten_free: bool,
    /// The user has allergies; see `allergy_list`.
    pub allergies: bool,
    /// Free-text allergy list, only meaningful when `allergies` is set.
    pub allergy_list: String,
    /// Additional free-text requests (typed or voice-transcribed).
    pub notes: String,
}

impl PreferenceSet {
    /// True when no flag is set and no free-text request was given.
    pub fn is_empty(&self) -> bool {
        !self.vegan
            && !self.athlete
            && !self.gluten_free
            && !self.allergies
            && self.notes.trim().is_empty()
    }

    /// Flatten to the single preference string the prompt template expects.
    ///
    /// Set flags become a comma-separated list, allergies carry their list
    /// inline, and the free-text notes follow after a period.
    pub fn flatten(&self) -> String {
        let mut parts = Vec::new();
        if self.vegan {
            parts.push("vegan".to_string());
        }
        if self.athlete {
            parts.push("athlete".to_string());
        }
        if self.gluten_free {
            parts.push("gluten_free".to_string());
        }
        if self.allergies {
            parts.push(format!("allergies: {}", self.allergy_list.trim()));
        }

        let flags = parts.join(", ");
        let notes = self.notes.trim();

        match (flags.is_empty(), notes.is_empty()) {
            (true, true) => String::new(),
            (false, true) => flags,
            (true, false) => notes.to_string(),
            (false, false) => format!("{}. {}", flags, notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_flags_only() {
        let prefs = PreferenceSet {
            vegan: true,
            gluten_free: true,
            ..Default::default()
        };
        assert_eq!(prefs.flatten(), "vegan, gluten_free");
    }

    #[test]
    fn test_flatten_includes_allergy_list() {
        let prefs = PreferenceSet {
            allergies: true,
            allergy_list: "peanuts, shellfish".to_string(),
            ..Default::default()
        };
        assert_eq!(prefs.flatten(), "allergies: peanuts, shellfish");
    }

    #[test]
    fn test_flatten_appends_notes_after_period() {
        let prefs = PreferenceSet {
            athlete: true,
            notes: "something spicy please".to_string(),
            ..Default::default()
        };
        assert_eq!(prefs.flatten(), "athlete. something spicy please");
    }

    #[test]
    fn test_empty_preferences() {
        let prefs = PreferenceSet::default();
        assert!(prefs.is_empty());
        assert_eq!(prefs.flatten(), "");

        let with_notes = PreferenceSet {
            notes: "surprise me".to_string(),
            ..Default::default()
        };
        assert!(!with_notes.is_empty());
        assert_eq!(with_notes.flatten(), "surprise me");
    }
}
