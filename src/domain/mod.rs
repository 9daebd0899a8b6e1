// Domain layer: code kinds, categories and ports. No I/O.

pub mod model;
pub mod ports;
