//! Embassy async tasks

pub mod receiver;

pub use receiver::{receiver_task, Receiver};
