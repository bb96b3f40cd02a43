pub mod controller;
pub mod participant;

pub use controller::*;
pub use participant::*;
