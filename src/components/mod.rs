//! UI Components
//!
//! Leptos components for the request form, history and dashboard.

mod modal;
mod search_panel;
mod draft_table;
mod request_form;
mod history_panel;
mod history_card;
mod dashboard_panel;

pub use modal::{Modal, ModalHandle};
pub use search_panel::SearchPanel;
pub use draft_table::DraftTable;
pub use request_form::{scroll_to_form, RequestForm};
pub use history_panel::HistoryPanel;
pub use history_card::HistoryCard;
pub use dashboard_panel::DashboardPanel;
