//! `shelfwise-rules`
//!
//! **Responsibility:** heuristic horizon estimation from a hand-authored rule table.
//!
//! - The table is static data; auditing or extending it never touches the resolver.
//! - Resolution is pure and total: every (name, category) pair yields a horizon.
//! - Keyword overrides are scanned in authored order and the first match wins.

pub mod resolver;
pub mod table;

pub use resolver::{GLOBAL_FALLBACK, HeuristicMatch, MatchKind, resolve, resolve_detailed};
pub use table::{CategoryRule, KeywordRule, RuleTable};
