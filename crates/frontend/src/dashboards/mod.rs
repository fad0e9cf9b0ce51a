pub mod d400_statistics;

pub use d400_statistics::ui::StatisticsDashboard;
