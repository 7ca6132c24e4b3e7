//! Evaluation of structural queries against the backing document.
//!
//! The engine implements the restricted child-axis subset of path queries
//! the store needs: an anchored sequence of named steps, each optionally
//! carrying a 1-based positional predicate, e.g. `/config/Group[2]/Item`.
//!
//! Semantics:
//!
//! - Matches come back in document order.
//! - The first step must name the document element; anything else matches
//!   nothing.
//! - A positional predicate applies within each parent's same-named child
//!   group, so `/r/a[1]/b` and `/r/a/b[1]` behave like their XPath
//!   counterparts.
//! - Malformed steps (empty names, non-decimal or unterminated predicates)
//!   match nothing; evaluation never fails.

use crate::document::{Element, XmlDocument};

/// Separator between query steps.
pub(crate) const STEP_SEPARATOR: &str = "/";

/// One parsed query step: an element name and an optional 1-based position.
#[derive(Debug)]
struct Step<'a> {
    name: &'a str,
    position: Option<usize>,
}

/// Parse a raw step like `Numbers[2]`.
///
/// Returns `None` for malformed steps: empty names, empty or non-decimal
/// predicates, or anything trailing the closing bracket.
fn parse_step(raw: &str) -> Option<Step<'_>> {
    let Some(open) = raw.find('[') else {
        return (!raw.is_empty()).then_some(Step {
            name: raw,
            position: None,
        });
    };

    let name = &raw[..open];
    let predicate = raw[open + 1..].strip_suffix(']')?;
    if name.is_empty() || predicate.is_empty() || !predicate.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let position = predicate.parse().ok()?;
    Some(Step {
        name,
        position: Some(position),
    })
}

/// Evaluate an anchored query against `document`.
///
/// Returns the matched elements in document order. Queries that are not
/// anchored, do not start at the document element, or contain a malformed
/// step match nothing.
pub fn evaluate<'doc>(document: &'doc XmlDocument, query: &str) -> Vec<&'doc Element> {
    let Some(root) = document.root() else {
        return Vec::new();
    };

    let mut raw_steps = query.split(STEP_SEPARATOR);
    // An anchored query starts with the separator, so the first piece of
    // the split is empty.
    if raw_steps.next() != Some("") {
        return Vec::new();
    }
    let Some(first) = raw_steps.next().and_then(parse_step) else {
        return Vec::new();
    };
    if first.name != root.name() {
        return Vec::new();
    }
    // The document element is alone at its level, so only position 1 can
    // select it.
    if first.position.is_some_and(|position| position != 1) {
        return Vec::new();
    }

    let mut matched = vec![root];
    for raw in raw_steps {
        let Some(step) = parse_step(raw) else {
            return Vec::new();
        };
        matched = select_children(&matched, &step);
        if matched.is_empty() {
            break;
        }
    }
    matched
}

/// Select each parent's matching children, applying the positional
/// predicate within that parent's same-named child group.
fn select_children<'doc>(parents: &[&'doc Element], step: &Step<'_>) -> Vec<&'doc Element> {
    let mut selected = Vec::new();
    for parent in parents {
        let mut named = parent.children().filter(|child| child.name() == step.name);
        match step.position {
            None => selected.extend(named),
            // Positions are 1-based; `[0]` selects nothing.
            Some(position) => {
                if let Some(hit) = position.checked_sub(1).and_then(|index| named.nth(index)) {
                    selected.push(hit);
                }
            }
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(xml: &str) -> XmlDocument {
        XmlDocument::parse(xml).unwrap()
    }

    fn texts(matches: &[&Element]) -> Vec<String> {
        matches
            .iter()
            .map(|element| element.text().unwrap_or_default())
            .collect()
    }

    const NUMBERS: &str =
        "<config><Numbers>1</Numbers><Numbers>2</Numbers><Numbers>3</Numbers></config>";

    const GROUPS: &str = "<config>\
         <Group><Item>a</Item><Item>b</Item></Group>\
         <Group><Item>c</Item></Group>\
         </config>";

    #[test]
    fn root_step_selects_document_element() {
        let document = doc("<config/>");
        let matches = evaluate(&document, "/config");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "config");
    }

    #[test]
    fn mismatched_root_matches_nothing() {
        let document = doc("<config><Key>v</Key></config>");
        assert!(evaluate(&document, "/settings/Key").is_empty());
    }

    #[test]
    fn unanchored_query_matches_nothing() {
        let document = doc("<config><Key>v</Key></config>");
        assert!(evaluate(&document, "config/Key").is_empty());
    }

    #[test]
    fn nested_path_selects_single_element() {
        let document = doc("<config><a><b><c>deep</c></b></a></config>");
        let matches = evaluate(&document, "/config/a/b/c");
        assert_eq!(texts(&matches), vec!["deep"]);
    }

    #[test]
    fn collection_matches_in_document_order() {
        let document = doc(NUMBERS);
        let matches = evaluate(&document, "/config/Numbers");
        assert_eq!(texts(&matches), vec!["1", "2", "3"]);
    }

    #[test]
    fn positional_predicate_is_one_based() {
        let document = doc(NUMBERS);
        assert_eq!(texts(&evaluate(&document, "/config/Numbers[1]")), vec!["1"]);
        assert_eq!(texts(&evaluate(&document, "/config/Numbers[3]")), vec!["3"]);
    }

    #[test]
    fn position_zero_matches_nothing() {
        let document = doc(NUMBERS);
        assert!(evaluate(&document, "/config/Numbers[0]").is_empty());
    }

    #[test]
    fn position_out_of_range_matches_nothing() {
        let document = doc(NUMBERS);
        assert!(evaluate(&document, "/config/Numbers[4]").is_empty());
    }

    #[test]
    fn predicate_applies_within_each_parent() {
        let document = doc(GROUPS);
        // First item of every group: one hit per parent.
        assert_eq!(texts(&evaluate(&document, "/config/Group/Item[1]")), vec!["a", "c"]);
        // Second item exists only in the first group.
        assert_eq!(texts(&evaluate(&document, "/config/Group/Item[2]")), vec!["b"]);
    }

    #[test]
    fn predicates_compose_along_the_path() {
        let document = doc(GROUPS);
        assert_eq!(texts(&evaluate(&document, "/config/Group[1]/Item[2]")), vec!["b"]);
        assert_eq!(texts(&evaluate(&document, "/config/Group[2]/Item")), vec!["c"]);
        assert_eq!(
            texts(&evaluate(&document, "/config/Group/Item")),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn root_accepts_only_position_one() {
        let document = doc("<config><Key>v</Key></config>");
        assert_eq!(evaluate(&document, "/config[1]/Key").len(), 1);
        assert!(evaluate(&document, "/config[2]/Key").is_empty());
    }

    #[test]
    fn empty_steps_match_nothing() {
        let document = doc("<config><a><b>v</b></a></config>");
        // Doubled separators do not start a descendant search.
        assert!(evaluate(&document, "/config//b").is_empty());
        assert!(evaluate(&document, "/config/a/").is_empty());
        assert!(evaluate(&document, "/config/").is_empty());
    }

    #[test]
    fn steps_descend_one_level_at_a_time() {
        let document = doc("<config><a><b>v</b></a></config>");
        assert!(evaluate(&document, "/config/b").is_empty());
    }

    #[test]
    fn malformed_predicates_match_nothing() {
        let document = doc(NUMBERS);
        for query in [
            "/config/Numbers[x]",
            "/config/Numbers[",
            "/config/Numbers[1",
            "/config/Numbers[]",
            "/config/Numbers[1]x",
            "/config/Numbers[1][2]",
            "/config/Numbers[-1]",
            "/config/[1]",
        ] {
            assert!(evaluate(&document, query).is_empty(), "query: {query}");
        }
    }

    #[test]
    fn empty_document_matches_nothing() {
        let document = XmlDocument::empty();
        assert!(evaluate(&document, "/config").is_empty());
        assert!(evaluate(&document, "/config/Key").is_empty());
    }
}
