// ==========================================
// Nationality Quota Engine - Nationality Tallies
// ==========================================
// Role: nationality key normalization + ordered key→count sheet
// Red line: counting never goes through a raw object-keyed map;
//           untrusted keys ("__proto__" etc.) are ordinary data here
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize a raw nationality string for use as a tally key.
///
/// # Rules
/// - leading/trailing whitespace stripped
/// - internal whitespace runs collapsed to a single space
///
/// Display casing is preserved; case folding happens only in the
/// internal lookup key (see [`fold_key`]).
pub fn normalize_nationality(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-folded lookup key for a (normalized) nationality name.
pub(crate) fn fold_key(name: &str) -> String {
    normalize_nationality(name).to_lowercase()
}

// ==========================================
// NationalityTally - one nationality, one count
// ==========================================

/// Count of current workers holding one nationality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityTally {
    /// Canonical nationality name (normalized)
    pub nationality: String,
    /// Number of current workers, always >= 0
    pub count: u32,
}

impl NationalityTally {
    pub fn new(nationality: impl Into<String>, count: u32) -> Self {
        Self {
            nationality: normalize_nationality(&nationality.into()),
            count,
        }
    }
}

// ==========================================
// TallySheet - insertion-ordered key→count map
// ==========================================

/// Insertion-ordered nationality→count mapping.
///
/// Keys are matched case-insensitively after normalization; the display
/// name of a bucket is the form seen first. Iteration order is first
/// occurrence order, which is what breakdown views present by default.
#[derive(Debug, Clone, Default)]
pub struct TallySheet {
    entries: Vec<NationalityTally>,
    index: HashMap<String, usize>,
}

impl TallySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` workers to the bucket for `raw_name`, creating the bucket
    /// on first sight. Returns the bucket's new count.
    pub fn add(&mut self, raw_name: &str, n: u32) -> u32 {
        let display = normalize_nationality(raw_name);
        let key = display.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => {
                self.entries[pos].count += n;
                self.entries[pos].count
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(NationalityTally {
                    nationality: display,
                    count: n,
                });
                n
            }
        }
    }

    /// Count one worker of `raw_name`.
    pub fn increment(&mut self, raw_name: &str) -> u32 {
        self.add(raw_name, 1)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.index.get(&fold_key(name)).map(|&pos| self.entries[pos].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|t| u64::from(t.count)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NationalityTally> {
        self.entries.iter()
    }

    /// Consume the sheet in first-occurrence order.
    pub fn into_tallies(self) -> Vec<NationalityTally> {
        self.entries
    }

    /// Consume the sheet sorted count-descending (ties keep first-occurrence
    /// order), used for quick breakdowns before a report exists.
    pub fn into_tallies_by_count_desc(self) -> Vec<NationalityTally> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses_whitespace() {
        assert_eq!(normalize_nationality("  Saudi  "), "Saudi");
        assert_eq!(normalize_nationality("South   Korean"), "South Korean");
        assert_eq!(normalize_nationality(""), "");
    }

    #[test]
    fn test_sheet_merges_case_variants_keeps_first_display() {
        let mut sheet = TallySheet::new();
        sheet.increment("Yemeni");
        sheet.increment("yemeni");
        sheet.increment(" YEMENI ");
        let tallies = sheet.into_tallies();
        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].nationality, "Yemeni");
        assert_eq!(tallies[0].count, 3);
    }

    #[test]
    fn test_sheet_preserves_insertion_order() {
        let mut sheet = TallySheet::new();
        for name in ["Indian", "Filipino", "Indian", "Nepali"] {
            sheet.increment(name);
        }
        let names: Vec<_> = sheet.iter().map(|t| t.nationality.as_str()).collect();
        assert_eq!(names, vec!["Indian", "Filipino", "Nepali"]);
    }

    #[test]
    fn test_sheet_builtin_like_keys_are_ordinary_data() {
        // A plain object-keyed accumulator would collide with prototype
        // members on keys like these; the sheet must not.
        let mut sheet = TallySheet::new();
        sheet.increment("__proto__");
        sheet.increment("constructor");
        sheet.increment("__proto__");
        assert_eq!(sheet.get("__proto__"), Some(2));
        assert_eq!(sheet.get("constructor"), Some(1));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.total(), 3);
    }

    #[test]
    fn test_sort_by_count_desc_is_stable_on_ties() {
        let mut sheet = TallySheet::new();
        sheet.add("Filipino", 1);
        sheet.add("Indian", 5);
        sheet.add("Sudanese", 1);
        let tallies = sheet.into_tallies_by_count_desc();
        let names: Vec<_> = tallies.iter().map(|t| t.nationality.as_str()).collect();
        assert_eq!(names, vec!["Indian", "Filipino", "Sudanese"]);
    }
}
