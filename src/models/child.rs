//! Child account model
//!
//! A youth account as seen from the parental dashboard.

use serde::{Deserialize, Serialize};

use super::ids::ChildId;
use super::money::Money;

/// A child's account managed by a parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAccount {
    pub id: ChildId,
    pub name: String,
    pub initials: String,
    pub balance: Money,
    /// Weekly pocket money
    pub allowance: Money,
    /// Weekly card spending limit
    pub spending_limit: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ChildAccount {
    /// Create a child account; initials are derived from the name
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: Money,
        allowance: Money,
        spending_limit: Money,
    ) -> Self {
        let name = name.into();
        let initials = initials_of(&name);
        Self {
            id: ChildId::new(id),
            name,
            initials,
            balance,
            allowance,
            spending_limit,
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
