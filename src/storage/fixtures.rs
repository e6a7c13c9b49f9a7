//! Deterministic sample dataset
//!
//! Mirrors the demo data of the policy list: policy names cycle through a
//! fixed catalogue, categories cycle open/closed/test by id, and authors are
//! drawn from a fixed roster. Dates are spread between 2020-01-01 and
//! 2024-12-31 by a fixed function of the id so that every run sees the same
//! dataset.

use crate::core::record::{PolicyRecord, PolicyType};
use chrono::{Days, NaiveDate};

/// People who create and modify policies
pub const USERS: [&str; 10] = [
    "Jon Doe",
    "Jane Smith",
    "Alice Johnson",
    "Bob Brown",
    "Monica Bellucci",
    "Clark Kent",
    "Bruce Wayne",
    "Diana Prince",
    "Peter Parker",
    "Tony Stark",
];

/// Policy names, assigned round-robin by id
pub const POLICY_NAMES: [&str; 10] = [
    "Space X launch insurance policy",
    "Monica Bellucci hair insurance",
    "Oceanic exploration liability policy",
    "Artificial intelligence malfunction insurance",
    "Celebrity endorsement insurance",
    "Film production completion insurance",
    "Natural disaster response policy",
    "Cybersecurity breach insurance",
    "Pandemic outbreak coverage",
    "Renewable energy project insurance",
];

const SPAN_DAYS: u64 = 1826;

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

fn spread_date(id: u64, multiplier: u64, increment: u64) -> NaiveDate {
    let offset = id.wrapping_mul(multiplier).wrapping_add(increment) % SPAN_DAYS;
    first_day() + Days::new(offset)
}

fn pick<T: Copy>(items: &[T], index: u64) -> T {
    items[(index % items.len() as u64) as usize]
}

/// Build one sample policy
pub fn sample_policy(id: u64) -> PolicyRecord {
    PolicyRecord::new(
        id,
        pick(&POLICY_NAMES, id),
        spread_date(id, 7919, 13),
        spread_date(id, 104_729, 101),
        pick(&USERS, id.wrapping_mul(7).wrapping_add(3)),
        pick(&USERS, id.wrapping_mul(3).wrapping_add(1)),
        pick(&PolicyType::ALL, id),
    )
}

/// Build `count` sample policies with ids `0..count`
pub fn sample_policies(count: usize) -> Vec<PolicyRecord> {
    (0..count as u64).map(sample_policy).collect()
}
