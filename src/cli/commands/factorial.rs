//! Factorial command.

use crate::error::AdderResult;
use crate::factorial::factorial;

/// Format `n!` as text (`n! = value`) or a JSON object.
pub fn render(n: u32, json: bool) -> AdderResult<String> {
    let value = factorial(n)?;

    if json {
        Ok(serde_json::json!({ "n": n, "factorial": value }).to_string())
    } else {
        Ok(format!("{n}! = {value}"))
    }
}

/// Run factorial command and print the result.
pub fn run(n: u32, json: bool) -> AdderResult<()> {
    println!("{}", render(n, json)?);
    Ok(())
}
