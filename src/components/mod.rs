pub mod angle_readout;
pub mod app;
pub mod dial;
pub mod dial_controls;
