//! Child account display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::ChildAccount;

#[derive(Tabled)]
struct ChildRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Weekly Allowance")]
    allowance: String,
    #[tabled(rename = "Spending Limit")]
    spending_limit: String,
}

/// Format child accounts as a table
pub fn format_child_list(children: &[ChildAccount]) -> String {
    if children.is_empty() {
        return "No child accounts found.".to_string();
    }

    let rows = children.iter().map(|child| ChildRow {
        id: child.id.to_string(),
        name: format!("({}) {}", child.initials, child.name),
        balance: child.balance.to_string(),
        allowance: child.allowance.to_string(),
        spending_limit: child.spending_limit.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
