//! Heuristic resolver: (item name, category) → horizon.

use tracing::debug;

use shelfwise_core::HorizonPair;

use crate::table::RuleTable;

/// Horizon used when the category has no rule at all.
pub const GLOBAL_FALLBACK: HorizonPair = HorizonPair::new(30, 30);

/// Which rule produced a heuristic horizon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// A keyword override matched the item name.
    Keyword(&'static str),
    /// The category is known but no keyword matched.
    CategoryDefault,
    /// The category is not in the table.
    GlobalFallback,
}

/// Detailed heuristic outcome (horizon + the rule that fired).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeuristicMatch {
    pub horizon: HorizonPair,
    pub kind: MatchKind,
}

impl RuleTable {
    /// Resolve a horizon and report which rule fired.
    ///
    /// Model:
    /// - Unknown category → [`GLOBAL_FALLBACK`].
    /// - Otherwise the first keyword override (authored order) contained in the
    ///   lowercased name.
    /// - Otherwise the category default.
    pub fn resolve_detailed(&self, name: &str, category: &str) -> HeuristicMatch {
        let Some(rule) = self.lookup(category) else {
            debug!(category, "no rule for category; using global fallback");
            return HeuristicMatch {
                horizon: GLOBAL_FALLBACK,
                kind: MatchKind::GlobalFallback,
            };
        };

        let name = name.to_lowercase();
        match rule.first_match(&name) {
            Some(hit) => HeuristicMatch {
                horizon: hit.horizon,
                kind: MatchKind::Keyword(hit.keyword),
            },
            None => HeuristicMatch {
                horizon: rule.default,
                kind: MatchKind::CategoryDefault,
            },
        }
    }

    pub fn resolve(&self, name: &str, category: &str) -> HorizonPair {
        self.resolve_detailed(name, category).horizon
    }
}

/// Resolve against the builtin rule table.
pub fn resolve(name: &str, category: &str) -> HorizonPair {
    RuleTable::builtin().resolve(name, category)
}

/// [`resolve`], plus which rule fired.
pub fn resolve_detailed(name: &str, category: &str) -> HeuristicMatch {
    RuleTable::builtin().resolve_detailed(name, category)
}
