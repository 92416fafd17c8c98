// Domain layer: zone records and the ports the scoring core talks through.

pub mod model;
pub mod ports;
