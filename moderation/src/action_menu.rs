use crate::models::{ActivationState, ApprovalOutcome};

/// The contextual menu of a list. One value per list, so at most one row's
/// menu can be open at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionMenu {
    #[default]
    Closed,
    Open(String),
}

impl ActionMenu {
    /// Opens the menu for `row_id`, closing any other row's menu.
    pub fn open(&mut self, row_id: &str) {
        *self = ActionMenu::Open(row_id.to_string());
    }

    /// Closes the menu if it is open for `row_id`, otherwise opens it there.
    pub fn toggle(&mut self, row_id: &str) {
        if self.is_open_for(row_id) {
            self.close();
        } else {
            self.open(row_id);
        }
    }

    pub fn close(&mut self) {
        *self = ActionMenu::Closed;
    }

    pub fn open_row(&self) -> Option<&str> {
        match self {
            ActionMenu::Open(id) => Some(id),
            ActionMenu::Closed => None,
        }
    }

    pub fn is_open_for(&self, row_id: &str) -> bool {
        self.open_row() == Some(row_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<A> {
    pub label: &'static str,
    pub action: A,
}

/// Entries offered for a vendor row. Derived from the legal targets, so a
/// deleted row or a self-transition is never offered.
pub fn vendor_entries(current: ActivationState) -> Vec<MenuEntry<ActivationState>> {
    current
        .allowed_targets()
        .iter()
        .map(|&target| MenuEntry {
            label: match target {
                ActivationState::Active => "Activate",
                ActivationState::Deactivated => "Deactivate",
                ActivationState::Deleted => "Delete",
            },
            action: target,
        })
        .collect()
}

pub fn pending_entries() -> [MenuEntry<ApprovalOutcome>; 2] {
    [
        MenuEntry {
            label: "Approve",
            action: ApprovalOutcome::Approve,
        },
        MenuEntry {
            label: "Delete",
            action: ApprovalOutcome::Reject,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_another_row_closes_previous() {
        let mut menu = ActionMenu::default();
        menu.open("a");
        menu.open("b");
        assert!(!menu.is_open_for("a"));
        assert!(menu.is_open_for("b"));
    }

    #[test]
    fn test_toggle() {
        let mut menu = ActionMenu::default();
        menu.toggle("a");
        assert_eq!(menu.open_row(), Some("a"));
        menu.toggle("b");
        assert_eq!(menu.open_row(), Some("b"));
        menu.toggle("b");
        assert_eq!(menu, ActionMenu::Closed);
    }

    #[test]
    fn test_at_most_one_open_across_rows() {
        let rows: Vec<String> = (0..8).map(|i| format!("row-{}", i)).collect();
        let mut menu = ActionMenu::default();

        for (step, row) in rows.iter().chain(rows.iter().rev()).enumerate() {
            if step % 3 == 0 {
                menu.toggle(row);
            } else {
                menu.open(row);
            }
            let open = rows.iter().filter(|r| menu.is_open_for(r)).count();
            assert!(open <= 1, "{} menus open after step {}", open, step);
        }
    }

    #[test]
    fn test_vendor_entries_per_state() {
        let labels = |state| {
            vendor_entries(state)
                .into_iter()
                .map(|e| e.label)
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(ActivationState::Active), vec!["Deactivate", "Delete"]);
        assert_eq!(labels(ActivationState::Deactivated), vec!["Activate", "Delete"]);
        assert!(labels(ActivationState::Deleted).is_empty());
    }

    #[test]
    fn test_pending_entries() {
        let entries = pending_entries();
        assert_eq!(entries[0].action, ApprovalOutcome::Approve);
        assert_eq!(entries[1].label, "Delete");
        assert_eq!(entries[1].action, ApprovalOutcome::Reject);
    }
}
