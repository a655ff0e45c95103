// Domain layer: models and ports (interfaces). No HTTP or transport
// specifics here.

pub mod model;
pub mod ports;
