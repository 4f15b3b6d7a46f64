// Domain layer: pattern identifiers, run reports, and the ports every demonstration is written against.

pub mod model;
pub mod ports;
