pub mod actions;
pub mod data;
pub mod state;
pub mod util;
