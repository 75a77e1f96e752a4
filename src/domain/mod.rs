// Domain layer: resource/operation vocabulary and ports. No HTTP here.

pub mod model;
pub mod ports;
