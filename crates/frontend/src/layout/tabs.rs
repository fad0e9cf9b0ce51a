//! Top-level navigation: which dashboard view is mounted

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Products = 0,
    Statistics = 1,
    Alerts = 2,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Products, Self::Statistics, Self::Alerts];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Value of the tab in the tab list
    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Statistics => "statistics",
            Self::Alerts => "alerts",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Statistics => "Statistics",
            Self::Alerts => "Price Alerts",
        }
    }
}

/// Applies a tab-list selection. Re-selecting the active tab is a no-op so the
/// mounted view keeps its state.
pub fn select_tab(active: RwSignal<DashboardTab>, key: &str) {
    let Some(tab) = DashboardTab::from_key(key) else {
        log::warn!("unknown dashboard tab '{}'", key);
        return;
    };
    if active.get_untracked() != tab {
        log::debug!("switching to tab #{} ({})", tab.index(), tab.key());
        active.set(tab);
    }
}
