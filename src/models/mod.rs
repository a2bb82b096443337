pub mod customer;
pub mod follow_up;
pub mod job;
pub mod worker;

pub use customer::*;
pub use follow_up::*;
pub use job::*;
pub use worker::*;
