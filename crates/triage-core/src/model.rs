use serde::{Deserialize, Serialize};

/// Ternary outcome of screening one category against the input text.
///
/// `Indeterminate` covers every oracle answer that is not a clean boolean
/// token; it is a data condition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Present,
    Absent,
    Indeterminate,
}

impl Verdict {
    /// Normalize a raw oracle answer: surrounding whitespace and letter case
    /// are ignored for the `true`/`false` tokens, anything else degrades to
    /// `Indeterminate`. Total; never fails.
    pub fn from_answer(raw: &str) -> Self {
        let norm = raw.trim();
        if norm.eq_ignore_ascii_case("true") {
            Verdict::Present
        } else if norm.eq_ignore_ascii_case("false") {
            Verdict::Absent
        } else {
            Verdict::Indeterminate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Present => "present",
            Verdict::Absent => "absent",
            Verdict::Indeterminate => "indeterminate",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw answer from an oracle provider, with attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// One recorded verdict of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub id: String,
    pub verdict: Verdict,
}

/// Completed batch result: one verdict per catalog category, in catalog
/// order. Only ever handed to the caller complete; partial state stays
/// inside the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationResult {
    entries: Vec<CategoryVerdict>,
}

impl EvaluationResult {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub(crate) fn record(&mut self, id: impl Into<String>, verdict: Verdict) {
        self.entries.push(CategoryVerdict {
            id: id.into(),
            verdict,
        });
    }

    pub fn get(&self, id: &str) -> Option<Verdict> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.verdict)
    }

    /// Ordered iteration, catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Verdict)> {
        self.entries.iter().map(|e| (e.id.as_str(), e.verdict))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_case_and_whitespace_variants() {
        assert_eq!(Verdict::from_answer("true"), Verdict::Present);
        assert_eq!(Verdict::from_answer("True"), Verdict::Present);
        assert_eq!(Verdict::from_answer("  TRUE \n"), Verdict::Present);
        assert_eq!(Verdict::from_answer("false"), Verdict::Absent);
        assert_eq!(Verdict::from_answer("\tFalse "), Verdict::Absent);
    }

    #[test]
    fn normalize_degrades_everything_else_to_indeterminate() {
        assert_eq!(Verdict::from_answer(""), Verdict::Indeterminate);
        assert_eq!(Verdict::from_answer("   "), Verdict::Indeterminate);
        assert_eq!(Verdict::from_answer("yes"), Verdict::Indeterminate);
        assert_eq!(
            Verdict::from_answer("True, the text clearly discusses anxiety."),
            Verdict::Indeterminate
        );
        assert_eq!(Verdict::from_answer("true."), Verdict::Indeterminate);
    }

    #[test]
    fn result_preserves_insertion_order() {
        let mut res = EvaluationResult::with_capacity(3);
        res.record("anxiety", Verdict::Present);
        res.record("sleep", Verdict::Absent);
        res.record("grief", Verdict::Indeterminate);

        let ids: Vec<&str> = res.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["anxiety", "sleep", "grief"]);
        assert_eq!(res.get("sleep"), Some(Verdict::Absent));
        assert_eq!(res.get("missing"), None);
    }

    #[test]
    fn result_serde_round_trip_keeps_order() {
        let mut res = EvaluationResult::with_capacity(2);
        res.record("anxiety", Verdict::Present);
        res.record("ocd", Verdict::Indeterminate);

        let json = serde_json::to_string(&res).unwrap();
        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = back.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["anxiety", "ocd"]);
        assert_eq!(back.get("ocd"), Some(Verdict::Indeterminate));
    }
}
