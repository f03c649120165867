//! Transaction history with search
//!
//! Optionally scoped to a child via the `childId` route state. An id that
//! doesn't resolve redirects to the parental dashboard.

use tracing::{debug, info, warn};

use crate::data::DataProvider;
use crate::models::{ChildAccount, Transaction};
use crate::navigation::{NavigationRequest, Navigator, Route, CHILD_ID_KEY};

pub const UNKNOWN_CHILD_ROUTE: Route = Route::ParentalDashboard;
pub const EMPTY_MESSAGE: &str = "No transactions found.";

#[derive(Debug, Clone)]
pub struct TransactionHistory {
    child: Option<ChildAccount>,
    transactions: Vec<Transaction>,
    search: String,
}

impl TransactionHistory {
    pub fn mount<P, N>(provider: &P, request: &NavigationRequest, navigator: &mut N) -> Option<Self>
    where
        P: DataProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        let child = match request.state_value(CHILD_ID_KEY) {
            Some(id) => match provider.child(id) {
                Some(child) => Some(child.clone()),
                None => {
                    warn!(child_id = id, "Child not found, redirecting");
                    navigator.replace(UNKNOWN_CHILD_ROUTE, None);
                    return None;
                }
            },
            None => None,
        };

        info!(
            child_id = child.as_ref().map(|c| c.id.as_str()).unwrap_or(""),
            "Transaction history loaded"
        );
        Some(Self {
            child,
            transactions: provider.transactions().to_vec(),
            search: String::new(),
        })
    }

    pub fn child(&self) -> Option<&ChildAccount> {
        self.child.as_ref()
    }

    /// Page heading, naming the child when scoped to one
    pub fn title(&self) -> String {
        match &self.child {
            Some(child) => format!("{}'s Transactions", child.name),
            None => "Transaction History".to_string(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        debug!(term = %self.search, "Transaction search changed");
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    /// Transactions matching the current search, newest first
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.matches(&self.search))
            .collect()
    }

    /// Message shown in place of the list when nothing matches
    pub fn empty_message(&self) -> Option<&'static str> {
        self.filtered().is_empty().then_some(EMPTY_MESSAGE)
    }

    pub fn back<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockDataProvider;
    use crate::navigation::{History, RouteState};

    fn mount(child_id: Option<&str>, history: &mut History) -> Option<TransactionHistory> {
        let request = NavigationRequest::new(
            Route::TransactionHistory,
            child_id.map(|id| RouteState::new().with(CHILD_ID_KEY, id)),
        );
        TransactionHistory::mount(&MockDataProvider::new(), &request, history)
    }

    #[test]
    fn test_mount_without_child() {
        let mut history = History::new(Route::TransactionHistory);
        let screen = mount(None, &mut history).unwrap();
        assert!(screen.child().is_none());
        assert_eq!(screen.title(), "Transaction History");
        assert_eq!(screen.filtered().len(), 10);
    }

    #[test]
    fn test_mount_for_child() {
        let mut history = History::new(Route::TransactionHistory);
        let screen = mount(Some("child2"), &mut history).unwrap();
        assert_eq!(screen.title(), "Chloe's Transactions");
    }

    #[test]
    fn test_unknown_child_redirects() {
        let mut history = History::new(Route::TransactionHistory);
        assert!(mount(Some("child9"), &mut history).is_none());
        assert_eq!(history.current().route, UNKNOWN_CHILD_ROUTE);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn test_search_filters_description_and_category() {
        let mut history = History::new(Route::TransactionHistory);
        let mut screen = mount(None, &mut history).unwrap();

        screen.set_search("pocket");
        assert_eq!(screen.filtered().len(), 2);

        screen.set_search("SHOPPING");
        let found: Vec<_> = screen.filtered().into_iter().map(|t| t.description.as_str()).collect();
        assert_eq!(found, ["WHSmith", "Waterstones"]);
        assert!(screen.empty_message().is_none());

        screen.set_search("zzz");
        assert_eq!(screen.empty_message(), Some(EMPTY_MESSAGE));

        screen.pop_search_char();
        screen.pop_search_char();
        screen.pop_search_char();
        assert_eq!(screen.filtered().len(), 10);
    }
}
