mod chick;
mod completion;
mod flock;
mod task;

pub use chick::*;
pub use completion::*;
pub use flock::*;
pub use task::*;
