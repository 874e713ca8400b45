// src/application/ports/mod.rs
pub mod error_sink;
pub mod time;

pub type ClockPort = dyn time::Clock;
pub type ErrorSinkPort = dyn error_sink::ErrorSink;
