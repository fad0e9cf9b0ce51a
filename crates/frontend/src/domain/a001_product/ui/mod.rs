pub mod history;
pub mod list;

pub use history::ProductHistoryPanel;
pub use list::ProductList;
