use crate::classifier::RuleEngine;
use crate::model::{MergeError, Record, WorkItem};
use crate::pipeline::results::{Resolution, ResultTable};
use tracing::debug;

/// Rule-pass outcome: how many rows the rules settled, and what is left.
#[derive(Debug)]
pub struct Partition<'a> {
    pub resolved: usize,
    pub unresolved: Vec<WorkItem<'a>>,
}

/// Runs the rule engine over every record. Decided rows go straight into
/// `table`; the rest come back as work items in input order.
pub fn partition<'a>(
    engine: &RuleEngine,
    records: &'a [Record],
    table: &ResultTable,
) -> Result<Partition<'a>, MergeError> {
    let mut resolved = 0;
    let mut unresolved = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let verdict = engine.evaluate(record);
        match verdict.into_result() {
            Some(result) => {
                debug!("Row {} resolved by rules: {:?}", index, verdict);
                table.set(index, Resolution::rule(result))?;
                resolved += 1;
            }
            None => unresolved.push(WorkItem { index, record }),
        }
    }

    Ok(Partition {
        resolved,
        unresolved,
    })
}
