//! Scenario runner used by the `genlist-demo` binary.
//!
//! A scenario is one invocation of the entry point with its own argument
//! vector. Failures are captured as `ScenarioOutcome::Failed` and reported on
//! the output stream; they never stop the remaining scenarios.

use std::io::{self, Write};

use tracing::debug;

use crate::error::GenlistError;

/// Output file of the default scenario that keeps line numbers.
pub const WITH_NUMBERS_OUTPUT: &str = "test_with_numbers.html";
/// Output file of the default scenario that passes `--no-line-numbers`.
pub const WITHOUT_NUMBERS_OUTPUT: &str = "test_without_numbers.html";

const PROGRAM_NAME: &str = "genlist";

/// One harness iteration: header, arguments, and the file it should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub args: Vec<String>,
    pub output: String,
}

impl Scenario {
    pub fn new(label: impl Into<String>, args: Vec<String>, output: impl Into<String>) -> Self {
        Scenario {
            label: label.into(),
            args,
            output: output.into(),
        }
    }
}

#[derive(Debug)]
pub enum ScenarioOutcome {
    Generated { output: String },
    Failed { error: GenlistError },
}

impl ScenarioOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, ScenarioOutcome::Generated { .. })
    }
}

/// The two stock scenarios over `input`: line numbers on, then off.
pub fn default_scenarios(input: &str) -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Testing with line numbers (default)...",
            vec![
                PROGRAM_NAME.to_string(),
                input.to_string(),
                WITH_NUMBERS_OUTPUT.to_string(),
            ],
            WITH_NUMBERS_OUTPUT,
        ),
        Scenario::new(
            "Testing without line numbers...",
            vec![
                PROGRAM_NAME.to_string(),
                input.to_string(),
                WITHOUT_NUMBERS_OUTPUT.to_string(),
                "--no-line-numbers".to_string(),
            ],
            WITHOUT_NUMBERS_OUTPUT,
        ),
    ]
}

/// Run one scenario through `entry`, printing its header and status line.
///
/// The only error returned is a failure to write to `out`; entry point
/// failures are folded into the outcome.
pub fn run_scenario<W, F, T>(
    scenario: &Scenario,
    out: &mut W,
    entry: &mut F,
) -> io::Result<ScenarioOutcome>
where
    W: Write,
    F: FnMut(&[String]) -> Result<T, GenlistError>,
{
    writeln!(out, "{}", scenario.label)?;
    debug!(args = ?scenario.args, "running scenario");
    let outcome = match entry(&scenario.args) {
        Ok(_) => {
            writeln!(out, "✓ Generated {}", scenario.output)?;
            ScenarioOutcome::Generated {
                output: scenario.output.clone(),
            }
        }
        Err(error) => {
            debug!(kind = error.kind(), output = %scenario.output, "scenario failed");
            writeln!(out, "✗ Error: {}", error)?;
            ScenarioOutcome::Failed { error }
        }
    };
    Ok(outcome)
}

/// Run every scenario in order, then print the completion line once.
pub fn run_scenarios<W, F, T>(
    scenarios: &[Scenario],
    out: &mut W,
    mut entry: F,
) -> io::Result<Vec<ScenarioOutcome>>
where
    W: Write,
    F: FnMut(&[String]) -> Result<T, GenlistError>,
{
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for (i, scenario) in scenarios.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        outcomes.push(run_scenario(scenario, out, &mut entry)?);
    }
    writeln!(out)?;
    writeln!(out, "Test complete!")?;
    Ok(outcomes)
}
