//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::screens::transaction_history::EMPTY_MESSAGE;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, newest first as given
pub fn format_transaction_list<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(|txn| TransactionRow {
            date: txn.date.format("%d %b %Y").to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            amount: txn.display_amount(),
        })
        .collect();

    if rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}
