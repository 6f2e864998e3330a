//! Top bar state: the employee/employer mode switch and the mobile nav drawer.
//!
//! Neither flag takes part in filtering. They live next to the page, not in
//! [`AppState`](super::AppState), so filter observers never see them.

/// Entries of the top navigation, in display order.
pub const NAV_ITEMS: [&str; 3] = ["Dashboard", "Resources", "Toolkit"];

/// The entry this page represents.
pub const ACTIVE_NAV_ITEM: &str = "Resources";

/// Top bar flags for one page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    employee_mode: bool,
    nav_menu_open: bool,
}

impl HeaderState {
    /// Employee mode on, drawer closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employee_mode: true,
            nav_menu_open: false,
        }
    }

    /// Whether the mode switch is in its employee position. Starts `true`.
    #[must_use]
    pub const fn is_employee_mode(&self) -> bool {
        self.employee_mode
    }

    /// Whether the mobile navigation drawer is open. Starts `false`.
    #[must_use]
    pub const fn is_nav_menu_open(&self) -> bool {
        self.nav_menu_open
    }

    /// Flips the employee/employer switch.
    ///
    /// # Returns
    ///
    /// The new mode: `true` for employee.
    pub fn toggle_employee_mode(&mut self) -> bool {
        self.employee_mode = !self.employee_mode;
        tracing::debug!(employee_mode = self.employee_mode, "header mode toggled");
        self.employee_mode
    }

    /// Opens the navigation drawer. Returns `false` if it already was open.
    pub fn open_nav_menu(&mut self) -> bool {
        self.set_nav_menu_open(true)
    }

    /// Closes the navigation drawer. Returns `false` if it already was closed.
    pub fn close_nav_menu(&mut self) -> bool {
        self.set_nav_menu_open(false)
    }

    fn set_nav_menu_open(&mut self, open: bool) -> bool {
        if self.nav_menu_open == open {
            return false;
        }
        tracing::debug!(open, "nav menu toggled");
        self.nav_menu_open = open;
        true
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}
