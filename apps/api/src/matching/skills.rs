//! Skill Normalizer — maps free-text skill spellings onto canonical keys.
//!
//! The synonym table is plain data injected into the scorer, so callers and tests
//! can substitute their own groups.

use std::collections::{HashMap, HashSet};

/// Canonical key → accepted spellings. Lookups are case-insensitive and trimmed.
const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    ("react", &["react.js", "reactjs", "react"]),
    ("html", &["html5", "html"]),
    ("css", &["css3", "css"]),
    ("javascript", &["js", "es6", "ecmascript", "javascript"]),
    ("typescript", &["ts", "typescript"]),
    ("node", &["node.js", "nodejs", "node"]),
    ("python", &["python", "py"]),
    ("java", &["java"]),
    ("sql", &["sql", "mysql", "postgresql"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("express", &["express", "express.js"]),
    ("vue", &["vue", "vue.js"]),
    ("angular", &["angular", "angular.js"]),
];

/// Read-only synonym table. Built once, shared by every scoring run.
#[derive(Debug, Clone)]
pub struct SkillTable {
    variant_to_canonical: HashMap<String, String>,
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::from_groups(DEFAULT_GROUPS.iter().map(|(canonical, variants)| {
            (canonical.to_string(), variants.iter().map(|v| v.to_string()))
        }))
    }
}

impl SkillTable {
    /// Builds a table from `(canonical, variants)` groups.
    ///
    /// When a spelling appears in several groups the first group wins. A canonical key
    /// claimed as a variant by an earlier group is followed to that group's key, so
    /// every entry points at a key that maps to itself and `normalize` is idempotent.
    pub fn from_groups<G, V>(groups: G) -> Self
    where
        G: IntoIterator<Item = (String, V)>,
        V: IntoIterator<Item = String>,
    {
        let mut variant_to_canonical = HashMap::new();
        for (canonical, variants) in groups {
            let canonical = fold(&canonical);
            if canonical.is_empty() {
                continue;
            }
            for variant in variants {
                let variant = fold(&variant);
                if !variant.is_empty() {
                    variant_to_canonical
                        .entry(variant)
                        .or_insert_with(|| canonical.clone());
                }
            }
            variant_to_canonical
                .entry(canonical.clone())
                .or_insert(canonical);
        }

        // Targets only ever point to the same or an earlier group, so chains end
        // at a self-mapped key.
        let resolved = variant_to_canonical
            .keys()
            .map(|variant| {
                let mut target = &variant_to_canonical[variant];
                while let Some(next) = variant_to_canonical.get(target).filter(|n| *n != target) {
                    target = next;
                }
                (variant.clone(), target.clone())
            })
            .collect();

        Self {
            variant_to_canonical: resolved,
        }
    }

    /// An empty table: every skill is its own canonical form.
    pub fn empty() -> Self {
        Self {
            variant_to_canonical: HashMap::new(),
        }
    }

    /// Lower-cases and trims `raw`, then resolves it through the table.
    /// Unknown skills come back in their folded form.
    pub fn normalize(&self, raw: &str) -> String {
        let folded = fold(raw);
        match self.variant_to_canonical.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        }
    }

    /// Canonical forms of `skills`, first occurrence order, duplicates dropped.
    pub fn canonical_set<S: AsRef<str>>(&self, skills: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        skills
            .iter()
            .map(|s| self.normalize(s.as_ref()))
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }
}

fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}
