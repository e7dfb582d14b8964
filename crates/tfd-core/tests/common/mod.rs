pub mod pages;
pub mod site_server;
