mod message_queue;
mod mutator;
mod signal;

pub use message_queue::MessageQueue;
pub use mutator::Mutator;
pub use signal::Signal;
