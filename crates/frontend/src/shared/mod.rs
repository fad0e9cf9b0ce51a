pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod fetch_state;
pub mod http_client;
pub mod icons;
pub mod number_format;
