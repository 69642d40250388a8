//! Default value functions for serde deserialization.

use crate::tour::CacheMissPolicy;

pub fn start_search_radius() -> u32 {
    20
}

pub fn cache_miss() -> CacheMissPolicy {
    CacheMissPolicy::ReturnFullRoute
}

pub fn max_iterations() -> usize {
    1_000_000
}

pub fn court_margin() -> i32 {
    20
}

pub fn passage_margin() -> i32 {
    30
}

pub fn net_half_thickness() -> i32 {
    4
}

pub fn net_inset() -> i32 {
    5
}
