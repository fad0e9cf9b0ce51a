pub mod list;

pub use list::PriceAlertsList;
