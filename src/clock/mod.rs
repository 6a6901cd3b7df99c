mod clock;
mod system_clock;

pub use clock::*;
pub use system_clock::*;
