mod properties;
mod sim;

pub use properties::*;
pub use sim::*;
