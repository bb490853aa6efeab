// Domain layer: request/response model and the handler port.

pub mod model;
pub mod ports;
