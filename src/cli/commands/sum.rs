//! Sum command - accumulate values given on the command line.

use serde::Serialize;

use crate::accumulator::{Accumulator, OverflowPolicy};
use crate::error::AdderResult;

/// Result of a `sum` invocation, as emitted with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumReport {
    pub initial: i64,
    pub values: Vec<i64>,
    pub total: i64,
    pub policy: OverflowPolicy,
}

/// Accumulate `values` starting from `initial` under `policy`.
///
/// Fails only under [`OverflowPolicy::Error`].
pub fn execute(initial: i64, values: &[i64], policy: OverflowPolicy) -> AdderResult<SumReport> {
    let mut acc = Accumulator::with_initial(initial).with_policy(policy);
    acc.apply(values.iter().copied())?;

    Ok(SumReport {
        initial,
        values: values.to_vec(),
        total: acc.total(),
        policy,
    })
}

/// Run sum command and print the total.
pub fn run(initial: i64, values: &[i64], policy: OverflowPolicy, json: bool) -> AdderResult<()> {
    let report = execute(initial, values, policy)?;
    crate::log_event!("sum", "done", "{} values, policy={policy}", values.len());

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("Total {}", report.total);
    }
    Ok(())
}
