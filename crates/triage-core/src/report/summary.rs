use crate::model::{EvaluationResult, Verdict};
use serde::{Deserialize, Serialize};

/// Order-preserving three-way split of a completed result, for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub present: Vec<String>,
    pub absent: Vec<String>,
    pub indeterminate: Vec<String>,
}

/// Partition category ids by verdict. Pure and total: every id lands in
/// exactly one list, each list keeps catalog order.
pub fn partition(result: &EvaluationResult) -> Partition {
    let mut out = Partition::default();
    for (id, verdict) in result.iter() {
        match verdict {
            Verdict::Present => out.present.push(id.to_string()),
            Verdict::Absent => out.absent.push(id.to_string()),
            Verdict::Indeterminate => out.indeterminate.push(id.to_string()),
        }
    }
    out
}
