// Domain layer: the ticket record, period buckets and the processor contract.

pub mod model;
pub mod ports;
