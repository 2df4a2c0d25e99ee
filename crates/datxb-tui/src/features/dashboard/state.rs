use datxb_core::dashboard::{FEATURE_CARDS, FeatureCard};

/// Cards per row in the dashboard grid.
pub const GRID_COLUMNS: usize = 2;

/// Focusable element on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardItem {
    /// Index into [`FEATURE_CARDS`].
    Card(usize),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    pub selected: DashboardItem,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            selected: DashboardItem::Card(0),
        }
    }
}

impl DashboardState {
    /// Cards first, then logout, wrapping.
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            DashboardItem::Card(i) if i + 1 < FEATURE_CARDS.len() => DashboardItem::Card(i + 1),
            DashboardItem::Card(_) => DashboardItem::Logout,
            DashboardItem::Logout => DashboardItem::Card(0),
        };
    }

    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            DashboardItem::Card(0) => DashboardItem::Logout,
            DashboardItem::Card(i) => DashboardItem::Card(i - 1),
            DashboardItem::Logout => DashboardItem::Card(FEATURE_CARDS.len() - 1),
        };
    }

    /// Moves one grid row down; the last row leads to logout.
    pub fn select_down(&mut self) {
        self.selected = match self.selected {
            DashboardItem::Card(i) if i + GRID_COLUMNS < FEATURE_CARDS.len() => {
                DashboardItem::Card(i + GRID_COLUMNS)
            }
            DashboardItem::Card(_) => DashboardItem::Logout,
            DashboardItem::Logout => DashboardItem::Card(0),
        };
    }

    /// Moves one grid row up; logout returns to the start of the last row.
    pub fn select_up(&mut self) {
        self.selected = match self.selected {
            DashboardItem::Card(i) if i >= GRID_COLUMNS => DashboardItem::Card(i - GRID_COLUMNS),
            DashboardItem::Card(_) => DashboardItem::Logout,
            DashboardItem::Logout => {
                DashboardItem::Card((FEATURE_CARDS.len() - 1) / GRID_COLUMNS * GRID_COLUMNS)
            }
        };
    }

    pub fn selected_card(&self) -> Option<&'static FeatureCard> {
        match self.selected {
            DashboardItem::Card(i) => FEATURE_CARDS.get(i),
            DashboardItem::Logout => None,
        }
    }
}
