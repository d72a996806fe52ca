pub mod controller;
pub mod error;
pub mod events;
pub mod state;
