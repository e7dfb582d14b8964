pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod index;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod site;
