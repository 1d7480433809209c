// AI module for scripted opponents

mod bot;
mod jitter_bot;

pub use bot::Bot;
pub use jitter_bot::JitterBot;
