//! Pure list narrowing for search boxes and category dropdowns.
//!
//! Narrowing is recomputed from the full list on every call; it never
//! mutates the list store and never falls back to the unfiltered list
//! when nothing matches.

use std::collections::BTreeMap;

/// A record that can be narrowed by free text and categorical facets.
pub trait Searchable {
    /// The string fields the free-text term is matched against.
    fn haystacks(&self) -> Vec<&str>;

    /// The current value of a categorical facet (e.g. `"status"`),
    /// or `None` if the record does not carry that facet.
    fn facet(&self, name: &str) -> Option<&str>;
}

/// Filter criteria for one screen: a free-text term plus exact-match
/// facet selections, combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub term: String,
    pub facets: BTreeMap<String, String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(name.into(), value.into());
        self
    }

    /// An all-default criteria set leaves the list unmodified.
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.facets.values().all(|v| v.is_empty())
    }
}

/// Return the records satisfying all criteria, preserving list order.
///
/// The term matches case-insensitively against any haystack field; each
/// non-empty facet selection must match its record value exactly. An
/// empty selection (the "all" dropdown entry) is ignored.
pub fn narrow<'a, T: Searchable>(records: &'a [T], criteria: &Criteria) -> Vec<&'a T> {
    let term = criteria.term.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            if !term.is_empty() {
                let hit = record
                    .haystacks()
                    .iter()
                    .any(|h| h.to_lowercase().contains(&term));
                if !hit {
                    return false;
                }
            }
            criteria
                .facets
                .iter()
                .filter(|(_, wanted)| !wanted.is_empty())
                .all(|(name, wanted)| record.facet(name) == Some(wanted.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        department: &'static str,
        status: &'static str,
    }

    impl Searchable for Row {
        fn haystacks(&self) -> Vec<&str> {
            vec![self.name, self.department]
        }

        fn facet(&self, name: &str) -> Option<&str> {
            match name {
                "department" => Some(self.department),
                "status" => Some(self.status),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Jane Doe",
                department: "Logistics",
                status: "active",
            },
            Row {
                name: "Omar Hassan",
                department: "Legal",
                status: "active",
            },
            Row {
                name: "Sara Khalil",
                department: "Logistics",
                status: "inactive",
            },
        ]
    }

    #[test]
    fn empty_criteria_returns_full_list() {
        let list = rows();
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        let result = narrow(&list, &criteria);
        assert_eq!(result.len(), list.len());
    }

    #[test]
    fn term_matches_case_insensitively_across_fields() {
        let list = rows();
        let result = narrow(&list, &Criteria::new().with_term("LOGIST"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn facets_and_term_combine_with_and() {
        let list = rows();
        let criteria = Criteria::new()
            .with_term("logistics")
            .with_facet("status", "active");
        let result = narrow(&list, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Jane Doe");
    }

    #[test]
    fn blank_facet_selection_is_ignored() {
        let list = rows();
        let result = narrow(&list, &Criteria::new().with_facet("status", ""));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn zero_matches_yield_empty_not_fallback() {
        let list = rows();
        let result = narrow(&list, &Criteria::new().with_term("warehouse"));
        assert!(result.is_empty());
    }

    #[test]
    fn narrowing_never_grows_the_list() {
        let list = rows();
        for term in ["", "a", "jane", "zzz"] {
            let result = narrow(&list, &Criteria::new().with_term(term));
            assert!(result.len() <= list.len());
            for r in result {
                assert!(list.iter().any(|x| std::ptr::eq(x, r)));
            }
        }
    }
}
