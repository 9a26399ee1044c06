pub mod config;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "helper")]
pub mod helper;

#[cfg(feature = "pin")]
pub mod pin;

#[cfg(feature = "pin")]
pub mod commands;
