pub mod download;
pub mod headless;
pub mod interactive;
pub mod ports;
