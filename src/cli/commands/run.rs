//! Run command - the fixed demonstration sequence.

use crate::accumulator::{Accumulator, OverflowPolicy};
use crate::error::AdderResult;

/// Values added by the demonstration run.
pub const DEMO_VALUES: [i64; 3] = [10, 20, 30];

/// Accumulate [`DEMO_VALUES`] from zero.
pub fn demo(policy: OverflowPolicy) -> Accumulator {
    let mut acc = Accumulator::new().with_policy(policy);
    for value in DEMO_VALUES {
        acc.add(value);
    }
    acc
}

/// Run the demonstration and print `Total 60`.
pub fn run(policy: OverflowPolicy) -> AdderResult<()> {
    let acc = demo(policy);
    acc.check()?;
    crate::debug_event!("run", "done", "policy={policy}");
    println!("{acc}");
    Ok(())
}
