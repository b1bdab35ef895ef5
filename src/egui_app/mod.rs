//! egui front end: the claim form, the prediction result and the log viewer.

pub mod controller;
pub mod state;
pub mod ui;
