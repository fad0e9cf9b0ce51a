pub mod tabs;

pub use tabs::DashboardTab;
