//! Routing between screens
//!
//! Screens never switch themselves; they ask a [`Navigator`] to go somewhere and
//! whoever owns the navigator decides what to mount next.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

/// Route state key carrying a savings pot identifier
pub const POT_ID_KEY: &str = "potId";

/// Route state key carrying a child account identifier
pub const CHILD_ID_KEY: &str = "childId";

/// Every destination in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Onboarding,
    ParentalDashboard,
    SavingsPotDetail,
    TransactionHistory,
    YouthDashboard,
    NotFound,
}

impl Route {
    /// URL-style path of the route
    pub fn path(&self) -> &'static str {
        match self {
            Self::Onboarding => "/",
            Self::ParentalDashboard => "/parental-dashboard",
            Self::SavingsPotDetail => "/savings-pot-detail",
            Self::TransactionHistory => "/transaction-history",
            Self::YouthDashboard => "/youth-dashboard",
            Self::NotFound => "/404",
        }
    }

    /// Resolve a path; anything unknown is [`Route::NotFound`]
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "/" | "" => Self::Onboarding,
            "/parental-dashboard" => Self::ParentalDashboard,
            "/savings-pot-detail" => Self::SavingsPotDetail,
            "/transaction-history" => Self::TransactionHistory,
            "/youth-dashboard" => Self::YouthDashboard,
            _ => Self::NotFound,
        }
    }

    /// Header title shown for the route
    pub fn title(&self) -> &'static str {
        match self {
            Self::Onboarding => "Create Account",
            Self::ParentalDashboard => "Parental Dashboard",
            Self::SavingsPotDetail => "Savings Pot",
            Self::TransactionHistory => "Transactions",
            Self::YouthDashboard => "My Dashboard",
            Self::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Optional key/value payload passed along with a navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState(BTreeMap<String, String>);

impl RouteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub route: Route,
    pub state: Option<RouteState>,
}

impl NavigationRequest {
    pub fn new(route: Route, state: Option<RouteState>) -> Self {
        Self { route, state }
    }

    /// Look up a key in the attached state
    pub fn state_value(&self, key: &str) -> Option<&str> {
        self.state.as_ref().and_then(|s| s.get(key))
    }
}

/// The routing capability screens depend on
pub trait Navigator {
    /// Move to `route`, optionally carrying state
    fn navigate_to(&mut self, route: Route, state: Option<RouteState>);

    /// Return to the previous entry, if any
    fn go_back(&mut self);

    /// Swap the current entry for `route` so Back skips it (redirects)
    fn replace(&mut self, route: Route, state: Option<RouteState>);
}

/// Stack-based navigator used by both front-ends
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<NavigationRequest>,
    /// Bumped on every change so owners can detect that a remount is due
    version: u64,
}

impl History {
    /// Start at `route` with no state
    pub fn new(route: Route) -> Self {
        Self {
            entries: vec![NavigationRequest::new(route, None)],
            version: 0,
        }
    }

    /// The entry currently on top of the stack
    pub fn current(&self) -> &NavigationRequest {
        // The stack is never emptied: go_back keeps the root entry.
        &self.entries[self.entries.len() - 1]
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Navigator for History {
    fn navigate_to(&mut self, route: Route, state: Option<RouteState>) {
        debug!(route = route.path(), "Navigating");
        self.entries.push(NavigationRequest::new(route, state));
        self.version += 1;
    }

    fn go_back(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
            self.version += 1;
        }
    }

    fn replace(&mut self, route: Route, state: Option<RouteState>) {
        debug!(route = route.path(), "Replacing current route");
        let last = self.entries.len() - 1;
        self.entries[last] = NavigationRequest::new(route, state);
        self.version += 1;
    }
}
