// Domain layer: record model and the ports the fetcher and config implement.

pub mod model;
pub mod ports;
