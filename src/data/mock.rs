//! Static demo data
//!
//! Everything the screens show comes from here: three savings pots, two
//! children, ten transactions from July 2024 and the main balance.

use chrono::NaiveDate;

use super::provider::{AccountBalance, DataProvider};
use crate::flow::{FieldValue, Payload};
use crate::models::{ChildAccount, Contribution, ControlValue, Money, PotIcon, SavingsPot, Transaction};
use crate::screens::onboarding::{
    FIELD_ALLOWANCE, FIELD_CHILD_DOB, FIELD_CHILD_NAME, FIELD_PARENT_EMAIL, FIELD_PARENT_NAME,
};

/// In-memory provider backed by fixed data
#[derive(Debug, Clone)]
pub struct MockDataProvider {
    pots: Vec<SavingsPot>,
    children: Vec<ChildAccount>,
    transactions: Vec<Transaction>,
    balance: AccountBalance,
}

impl MockDataProvider {
    pub fn new() -> Self {
        Self {
            pots: mock_pots(),
            children: mock_children(),
            transactions: mock_transactions(),
            balance: AccountBalance {
                balance: Money::from_pence(24550),
                change_this_week: Money::from_pounds(10),
            },
        }
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for MockDataProvider {
    fn onboarding_defaults(&self) -> Payload {
        let mut payload = Payload::new();
        for name in [FIELD_PARENT_NAME, FIELD_PARENT_EMAIL, FIELD_CHILD_NAME, FIELD_CHILD_DOB] {
            payload.insert(name.to_string(), FieldValue::Text(String::new()));
        }
        payload.insert(
            FIELD_ALLOWANCE.to_string(),
            FieldValue::Control(ControlValue::new(true, Money::from_pounds(10))),
        );
        payload
    }

    fn main_balance(&self) -> AccountBalance {
        self.balance
    }

    fn savings_pots(&self) -> &[SavingsPot] {
        &self.pots
    }

    fn children(&self) -> &[ChildAccount] {
        &self.children
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

fn history(amounts: [i64; 4]) -> Vec<Contribution> {
    ["Jan", "Feb", "Mar", "Apr"]
        .into_iter()
        .zip(amounts)
        .map(|(month, pounds)| Contribution::new(month, Money::from_pounds(pounds)))
        .collect()
}

fn mock_pots() -> Vec<SavingsPot> {
    vec![
        SavingsPot::new(
            "pot1",
            "New Console",
            PotIcon::Gamepad,
            Money::from_pounds(150),
            Money::from_pounds(499),
        )
        .with_history(history([20, 50, 30, 50])),
        SavingsPot::new(
            "pot2",
            "Mountain Bike",
            PotIcon::Bike,
            Money::from_pounds(320),
            Money::from_pounds(700),
        )
        .with_history(history([100, 80, 70, 70])),
        SavingsPot::new(
            "pot3",
            "University Fund",
            PotIcon::GraduationCap,
            Money::from_pounds(950),
            Money::from_pounds(5000),
        )
        .with_history(history([200, 250, 250, 250])),
    ]
}

fn mock_children() -> Vec<ChildAccount> {
    vec![
        ChildAccount::new(
            "child1",
            "Alex",
            Money::from_pence(12550),
            Money::from_pounds(10),
            Money::from_pounds(50),
        )
        .with_avatar("https://i.pravatar.cc/150?u=alex"),
        ChildAccount::new(
            "child2",
            "Chloe",
            Money::from_pounds(78),
            Money::from_pounds(5),
            Money::from_pounds(30),
        )
        .with_avatar("https://i.pravatar.cc/150?u=chloe"),
    ]
}

fn july(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, day).unwrap_or_default()
}

fn mock_transactions() -> Vec<Transaction> {
    [
        ("1", 28, "Pocket Money", 1000, "Allowance"),
        ("2", 27, "Odeon Cinema", -750, "Entertainment"),
        ("3", 26, "WHSmith", -499, "Shopping"),
        ("4", 25, "Gift from Grandma", 2000, "Gift"),
        ("5", 24, "Tesco Express", -320, "Groceries"),
        ("6", 21, "Pocket Money", 1000, "Allowance"),
        ("7", 20, "Game Store Top-up", -1500, "Gaming"),
        ("8", 19, "McDonald's", -640, "Food"),
        ("9", 18, "Bus Fare", -150, "Transport"),
        ("10", 17, "Waterstones", -899, "Shopping"),
    ]
    .into_iter()
    .map(|(id, day, description, pence, category)| {
        Transaction::new(id, july(day), description, Money::from_pence(pence), category)
    })
    .collect()
}
