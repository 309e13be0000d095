pub mod api;
pub mod config;
pub mod data_models;
pub mod pages;
pub mod query_input;
pub mod results_view;
pub mod routes;
pub mod search_client;
