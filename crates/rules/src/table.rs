//! Category rule table.
//!
//! Each category carries a default horizon and an **ordered** list of keyword
//! overrides. Keywords are lowercase substrings matched against the lowercased
//! item name; earlier entries take precedence over later ones, so more specific
//! keywords must be listed before the generic ones they contain
//! (`"pineapple"` before `"apple"`, `"buttermilk"` before `"milk"`).

use shelfwise_core::HorizonPair;

/// One keyword override: `keyword` (lowercase substring) → horizon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub horizon: HorizonPair,
}

/// Rule for a single category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: &'static str,
    pub default: HorizonPair,
    pub keyword_overrides: &'static [KeywordRule],
}

impl CategoryRule {
    /// First override whose keyword occurs in `lowercase_name`, in authored order.
    pub fn first_match(&self, lowercase_name: &str) -> Option<&KeywordRule> {
        self.keyword_overrides
            .iter()
            .find(|rule| lowercase_name.contains(rule.keyword))
    }
}

/// Immutable, process-wide category → rule mapping.
#[derive(Debug, Copy, Clone)]
pub struct RuleTable {
    rules: &'static [CategoryRule],
}

impl RuleTable {
    pub const fn new(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// The shipped rule table.
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    /// Look up a category, ignoring surrounding whitespace and ASCII case.
    pub fn lookup(&self, category: &str) -> Option<&CategoryRule> {
        let category = category.trim();
        self.rules
            .iter()
            .find(|rule| rule.category.eq_ignore_ascii_case(category))
    }

    pub fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.category)
    }
}

const fn kw(keyword: &'static str, shelf_life_days: u32, restock_days: u32) -> KeywordRule {
    KeywordRule {
        keyword,
        horizon: HorizonPair::new(shelf_life_days, restock_days),
    }
}

const fn days(shelf_life_days: u32, restock_days: u32) -> HorizonPair {
    HorizonPair::new(shelf_life_days, restock_days)
}

static BUILTIN: RuleTable = RuleTable::new(CATEGORY_RULES);

const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Produce",
        default: days(7, 7),
        keyword_overrides: &[
            kw("banana", 5, 5),
            kw("avocado", 4, 5),
            kw("berr", 5, 7),
            kw("lettuce", 7, 7),
            kw("spinach", 5, 7),
            kw("herb", 7, 10),
            kw("tomato", 7, 7),
            kw("pineapple", 5, 7),
            kw("apple", 30, 14),
            kw("lemon", 28, 21),
            kw("orange", 21, 14),
            kw("carrot", 28, 14),
            kw("onion", 30, 21),
            kw("potato", 35, 21),
        ],
    },
    CategoryRule {
        category: "Dairy",
        default: days(10, 7),
        keyword_overrides: &[
            kw("buttermilk", 14, 14),
            kw("milk", 7, 7),
            kw("yogurt", 14, 7),
            kw("cream cheese", 21, 14),
            kw("sour cream", 21, 14),
            kw("cheese", 30, 14),
            kw("cream", 10, 10),
            kw("butter", 60, 30),
            kw("egg", 28, 14),
        ],
    },
    CategoryRule {
        category: "Meat",
        default: days(3, 7),
        keyword_overrides: &[
            kw("frozen", 180, 30),
            kw("jerky", 365, 30),
            kw("ground", 2, 7),
            kw("burger", 2, 7),
            kw("chicken", 2, 7),
            kw("turkey", 2, 7),
            kw("fish", 2, 7),
            kw("salmon", 2, 7),
            kw("steak", 4, 7),
            kw("bacon", 7, 14),
            kw("sausage", 7, 14),
            kw("deli", 5, 7),
            kw("ham", 5, 10),
        ],
    },
    CategoryRule {
        category: "Pantry",
        default: days(180, 30),
        keyword_overrides: &[
            // Listed ahead of the shorter words they contain.
            kw("breadcrumb", 180, 30),
            kw("pecan", 180, 30),
            kw("licorice", 270, 30),
            kw("bread", 5, 5),
            kw("tortilla", 14, 10),
            kw("chip", 60, 14),
            kw("cracker", 120, 21),
            kw("cereal", 180, 21),
            kw("peanut butter", 180, 30),
            kw("coffee", 180, 21),
            kw("flour", 240, 60),
            kw("candy", 270, 30),
            kw("oil", 365, 60),
            kw("can", 730, 30),
            kw("pasta", 730, 45),
            kw("rice", 730, 60),
            kw("sugar", 730, 90),
            kw("honey", 730, 120),
            kw("spice", 730, 180),
        ],
    },
    CategoryRule {
        category: "Frozen",
        default: days(180, 30),
        keyword_overrides: &[
            kw("ice cream", 60, 21),
            kw("pizza", 180, 21),
            kw("waffle", 180, 21),
            kw("dinner", 180, 14),
            kw("meal", 180, 14),
            kw("vegetable", 240, 30),
            kw("fruit", 240, 30),
        ],
    },
    CategoryRule {
        category: "Beverages",
        default: days(270, 14),
        keyword_overrides: &[
            kw("milk", 7, 7),
            kw("juice", 10, 7),
            kw("kombucha", 60, 14),
            kw("coffee", 180, 21),
            kw("tea", 365, 30),
            kw("beer", 180, 14),
            kw("wine", 730, 30),
            kw("soda", 270, 14),
            kw("water", 730, 14),
        ],
    },
    CategoryRule {
        category: "Household",
        default: days(365, 45),
        keyword_overrides: &[
            kw("paper towel", 730, 14),
            kw("toilet paper", 730, 14),
            kw("trash bag", 730, 30),
            kw("dish soap", 365, 30),
            kw("detergent", 365, 30),
            kw("bleach", 180, 60),
            kw("sponge", 730, 21),
            kw("batter", 730, 90),
        ],
    },
    CategoryRule {
        category: "Personal Care",
        default: days(730, 60),
        keyword_overrides: &[
            kw("sunscreen", 365, 90),
            kw("vitamin", 365, 30),
            kw("lotion", 365, 60),
            kw("toothpaste", 730, 45),
            kw("shampoo", 730, 45),
            kw("deodorant", 730, 30),
            kw("razor", 730, 30),
            kw("soap", 730, 30),
        ],
    },
    CategoryRule {
        category: "Baby",
        default: days(180, 14),
        keyword_overrides: &[
            kw("formula", 30, 7),
            kw("pouch", 365, 7),
            kw("jar", 365, 7),
            kw("wipe", 365, 10),
            kw("diaper", 730, 7),
        ],
    },
    CategoryRule {
        category: "Pet",
        default: days(365, 30),
        keyword_overrides: &[
            kw("fresh", 7, 7),
            kw("can", 730, 14),
            kw("wet", 730, 14),
            kw("kibble", 180, 30),
            kw("dry", 180, 30),
            kw("treat", 365, 21),
            kw("litter", 730, 21),
        ],
    },
];
