mod close;

pub use close::*;
