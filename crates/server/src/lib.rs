pub mod controller;
pub mod errors;
pub mod handler;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use handler::Handlers;
pub use startup::run;
