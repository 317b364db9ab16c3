// Domain layer: event model and ports (interfaces). No knowledge of Firestore
// or the hosting platform lives here.

pub mod model;
pub mod ports;
