//! Expense categories
//!
//! The category set is a configuration constant. An expense stores its
//! category as a plain string and the core never rejects unknown names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket used for expenses with an empty category when grouping
pub const OTHER_CATEGORY: &str = "Other";

/// The categories offered when entering an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    FoodAndDining,
    Shopping,
    Housing,
    Transportation,
    Entertainment,
    Healthcare,
    Education,
    PersonalCare,
    Travel,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::FoodAndDining,
            Self::Shopping,
            Self::Housing,
            Self::Transportation,
            Self::Entertainment,
            Self::Healthcare,
            Self::Education,
            Self::PersonalCare,
            Self::Travel,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// The name stored on expenses
    pub fn name(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Shopping => "Shopping",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::Other => OTHER_CATEGORY,
        }
    }

    /// Look up a category by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
