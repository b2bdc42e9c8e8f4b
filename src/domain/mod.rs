// Domain layer: service descriptors and the rendering port. No runtime or HTTP dependencies.

pub mod model;
pub mod ports;
