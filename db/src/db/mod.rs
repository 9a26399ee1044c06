mod class_channel;
mod class_pin;

pub use class_channel::ClassChannel;
pub use class_pin::ClassPin;
