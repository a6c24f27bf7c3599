pub mod config;
pub mod logging;

pub mod clean;
pub mod extract;
pub mod fetch_page;
pub mod pipeline;
pub mod playlist;
pub mod url_model;
