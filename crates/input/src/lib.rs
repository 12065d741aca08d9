pub mod controller;

pub use controller::ControllerInput;
