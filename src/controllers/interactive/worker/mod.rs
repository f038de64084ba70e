pub mod messages;
pub mod thread_worker;
