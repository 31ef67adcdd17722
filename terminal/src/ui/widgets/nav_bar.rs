//! # Navigation Bar Widget
//!
//! Buy / Send / Receive tab strip with the active tab bracketed.

use crate::app::state::Tab;

pub fn render_tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[ {} ]", tab.label())
            } else {
                format!("  {}  ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_is_bracketed() {
        assert_eq!(render_tab_bar(Tab::Send), "  Buy   [ Send ]   Receive  ");
    }
}
