pub mod bar_chart;
pub mod change_badge;
pub mod date_input;
pub mod fetch_phase;
pub mod page_header;
pub mod stat_card;

pub use bar_chart::BarChart;
pub use change_badge::ChangeBadge;
pub use date_input::DateInput;
pub use fetch_phase::render_phase;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
