// Domain layer: the movie record and the seams the rest of the crate plugs into.

pub mod model;
pub mod ports;
