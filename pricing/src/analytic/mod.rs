mod black76;

pub use black76::{Black76Call, Black76Put, FuturesOption};
