//! Read-only listing commands: pots, pot, transactions, children
//!
//! Lookups go through the same screen models as the TUI, so an unknown id
//! produces the same redirect.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::data::DataProvider;
use crate::display::{format_child_list, format_pot_details, format_pot_list, format_transaction_list};
use crate::error::GrowBankResult;
use crate::navigation::{History, NavigationRequest, Route, RouteState, CHILD_ID_KEY, POT_ID_KEY};
use crate::screens::{SavingsPotDetail, TransactionHistory};

/// List every savings pot
pub fn show_pots<P, W>(provider: &P, out: &mut W) -> GrowBankResult<()>
where
    P: DataProvider + ?Sized,
    W: Write,
{
    writeln!(out, "{}", format_pot_list(provider.savings_pots()))?;
    Ok(())
}

/// Show one pot, or follow the redirect when it doesn't exist.
/// Returns the route the user ends on.
pub fn show_pot<P, W>(provider: &P, pot_id: &str, out: &mut W) -> GrowBankResult<Route>
where
    P: DataProvider + ?Sized,
    W: Write,
{
    let request = NavigationRequest::new(
        Route::SavingsPotDetail,
        Some(RouteState::new().with(POT_ID_KEY, pot_id)),
    );
    let mut history = History::new(Route::SavingsPotDetail);

    match SavingsPotDetail::mount(provider, &request, &mut history, Instant::now(), Duration::ZERO) {
        Some(detail) => {
            write!(out, "{}", format_pot_details(detail.pot()))?;
            Ok(Route::SavingsPotDetail)
        }
        None => {
            let route = history.current().route;
            writeln!(
                out,
                "Savings pot '{}' not found. Showing {} instead.",
                pot_id,
                route.title()
            )?;
            writeln!(out)?;
            show_pots(provider, out)?;
            Ok(route)
        }
    }
}

/// List transactions, optionally for one child and filtered by `search`.
/// Returns the route the user ends on.
pub fn show_transactions<P, W>(
    provider: &P,
    child_id: Option<&str>,
    search: Option<&str>,
    out: &mut W,
) -> GrowBankResult<Route>
where
    P: DataProvider + ?Sized,
    W: Write,
{
    let request = NavigationRequest::new(
        Route::TransactionHistory,
        child_id.map(|id| RouteState::new().with(CHILD_ID_KEY, id)),
    );
    let mut history = History::new(Route::TransactionHistory);

    let Some(mut screen) = TransactionHistory::mount(provider, &request, &mut history) else {
        let route = history.current().route;
        writeln!(
            out,
            "Child '{}' not found. Showing {} instead.",
            child_id.unwrap_or_default(),
            route.title()
        )?;
        writeln!(out)?;
        show_children(provider, out)?;
        return Ok(route);
    };

    if let Some(term) = search {
        screen.set_search(term);
    }

    writeln!(out, "{}", screen.title())?;
    writeln!(out, "{}", format_transaction_list(screen.filtered()))?;
    Ok(Route::TransactionHistory)
}

/// List child accounts
pub fn show_children<P, W>(provider: &P, out: &mut W) -> GrowBankResult<()>
where
    P: DataProvider + ?Sized,
    W: Write,
{
    writeln!(out, "{}", format_child_list(provider.children()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockDataProvider;

    fn capture<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> GrowBankResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_known_pot() {
        let data = MockDataProvider::new();
        let output = capture(|out| {
            assert_eq!(show_pot(&data, "pot2", out)?, Route::SavingsPotDetail);
            Ok(())
        });
        assert!(output.contains("Mountain Bike"));
        assert!(output.contains("Contribution History"));
    }

    #[test]
    fn test_unknown_pot_redirects_to_dashboard() {
        let data = MockDataProvider::new();
        let output = capture(|out| {
            assert_eq!(show_pot(&data, "pot9", out)?, Route::YouthDashboard);
            Ok(())
        });
        assert!(output.starts_with("Savings pot 'pot9' not found. Showing My Dashboard instead."));
        assert!(output.contains("University Fund"));
    }

    #[test]
    fn test_transactions_with_search() {
        let data = MockDataProvider::new();
        let output = capture(|out| {
            show_transactions(&data, Some("child1"), Some("cinema"), out)?;
            Ok(())
        });
        assert!(output.starts_with("Alex's Transactions"));
        assert!(output.contains("Odeon Cinema"));
        assert!(!output.contains("WHSmith"));
    }

    #[test]
    fn test_transactions_with_no_match() {
        let data = MockDataProvider::new();
        let output = capture(|out| {
            show_transactions(&data, None, Some("zzz"), out)?;
            Ok(())
        });
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn test_unknown_child_redirects_to_parental_dashboard() {
        let data = MockDataProvider::new();
        let output = capture(|out| {
            assert_eq!(
                show_transactions(&data, Some("child9"), None, out)?,
                Route::ParentalDashboard
            );
            Ok(())
        });
        assert!(output.contains("Showing Parental Dashboard instead."));
        assert!(output.contains("Chloe"));
    }
}
