mod handler;
mod model;

pub use handler::{my_location, update_location};
