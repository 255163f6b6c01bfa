// Domain layer: raw compose input, canonical output records and the source port.

pub mod compose;
pub mod model;
pub mod ports;
