//! Fixed, ordered category→question table. The catalog is built once at
//! process start and is immutable afterwards; its iteration order fixes
//! progress fractions and display order.

use crate::errors::CatalogError;

/// Substitution point each question template must contain exactly once.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Registration table for the built-in screening catalog. Adding a category
/// is a data change, not a control-flow change.
const BUILTIN: &[(&str, &str)] = &[
    (
        "anxiety",
        "Does the following text discuss feelings of worry, nervousness, unease, or express concerns about future events? Does it mention physical symptoms like rapid heartbeat, sweating, or difficulty breathing? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "depression",
        "Does the following text express persistent feelings of sadness, hopelessness, loss of interest, or decreased motivation? Does it mention changes in sleep, appetite, or energy levels? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "overthinking",
        "Does the following text indicate excessive analysis, rumination, or getting stuck in thought loops? Does it show signs of overanalyzing situations or inability to make decisions due to excessive thinking? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "stress",
        "Does the following text describe feeling overwhelmed, under pressure, or experiencing difficulty coping with demands? Does it mention physical or emotional tension? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "negative_thinking",
        "Does the following text show patterns of pessimistic thoughts, self-criticism, or focusing primarily on negative aspects of situations? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "loneliness",
        "Does the following text express feelings of isolation, disconnection from others, or a desire for more meaningful relationships? Does it discuss social isolation or difficulty connecting with others? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "self_improvement",
        "Does the following text discuss personal growth, development goals, or efforts to better oneself? Does it mention strategies or plans for improving mental health, habits, or life circumstances? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "anger",
        "Does the following text express irritability, frustration, rage, or difficulty controlling angry reactions? Does it describe conflicts, outbursts, or resentment toward others or situations? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "grief",
        "Does the following text discuss experiences of loss, bereavement, or processing difficult life changes? Does it express emotions related to mourning or dealing with significant losses? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "sleep",
        "Does the following text mention difficulties with sleep patterns, insomnia, or unusual sleep behaviors? Does it discuss changes in sleep quality or quantity? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "ocd",
        "Does the following text describe recurring thoughts, compulsive behaviors, or strict routines that feel necessary? Does it mention distress about order, cleanliness, or repeated checking? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "sexual_dysfunction",
        "Does the following text discuss concerns about sexual health, intimacy issues, or changes in sexual function? Does it mention distress about sexual performance or satisfaction? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "bipolar",
        "Does the following text describe significant mood swings, periods of unusually high energy alternating with low periods, or dramatic changes in behavior and thinking? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
    (
        "addiction",
        "Does the following text discuss struggles with substance use, compulsive behaviors, or difficulty controlling specific activities? Does it mention impact on daily life due to these behaviors? Answer 'True' if yes, 'False' if no.\nText: {text}",
    ),
];

/// One screening dimension: a stable identifier plus a yes/no question
/// template with a single `{text}` substitution point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    question: String,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Substitute the subject text into the template. The oracle receives
    /// the verbatim user text embedded in the question; no truncation or
    /// escaping is applied.
    pub fn render(&self, text: &str) -> String {
        self.question.replacen(TEXT_PLACEHOLDER, text, 1)
    }
}

/// Ordered, validated set of categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validate and build a catalog. Identifier uniqueness and the
    /// one-placeholder-per-template invariant are enforced here so template
    /// defects surface at startup, not mid-batch.
    pub fn new<I, S, T>(categories: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut out: Vec<Category> = Vec::new();
        for (id, question) in categories {
            let id = id.into();
            let question = question.into();
            if out.iter().any(|c| c.id == id) {
                return Err(CatalogError::DuplicateId(id));
            }
            let found = question.matches(TEXT_PLACEHOLDER).count();
            if found != 1 {
                return Err(CatalogError::BadPlaceholder { id, found });
            }
            out.push(Category { id, question });
        }
        if out.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { categories: out })
    }

    /// The fixed built-in screening catalog.
    pub fn builtin() -> Self {
        // The table is static; a placeholder defect here is a programming
        // error, not a runtime condition.
        Self::new(BUILTIN.iter().copied()).expect("built-in catalog is valid")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid_and_ordered() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 14);
        let ids: Vec<&str> = catalog.iter().map(Category::id).collect();
        assert_eq!(ids[0], "anxiety");
        assert_eq!(ids[13], "addiction");
    }

    #[test]
    fn render_substitutes_text_verbatim() {
        let catalog = Catalog::new([("sleep", "Trouble sleeping? Text: {text}")]).unwrap();
        let cat = catalog.iter().next().unwrap();
        let query = cat.render("I can't sleep {at all}");
        assert_eq!(query, "Trouble sleeping? Text: I can't sleep {at all}");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new([("a", "q {text}"), ("a", "q2 {text}")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".into()));
    }

    #[test]
    fn rejects_templates_without_exactly_one_placeholder() {
        let err = Catalog::new([("a", "no placeholder")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::BadPlaceholder {
                id: "a".into(),
                found: 0
            }
        );

        let err = Catalog::new([("a", "{text} and {text}")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::BadPlaceholder {
                id: "a".into(),
                found: 2
            }
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::new(Vec::<(&str, &str)>::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }
}
