// Observability: metrics counters. Logging setup lives in `crate::logging`.

pub mod metrics;
