pub mod config;
pub mod contact_client;
pub mod contact_form;
mod content;
pub mod domain;
pub mod form_sweeper;
mod routes;
mod session_state;
mod startup;
pub mod telemetry;
mod util;

pub use startup::run;
