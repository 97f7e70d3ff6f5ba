//! The dependency-encoding mini-language.
//!
//! The `DependsOn` cell of a task row encodes zero or more references to
//! earlier tasks:
//!
//! - empty → no dependency
//! - `3` → plain reference to task 3
//! - `5:yes` → decision-branch reference to task 5 with label `yes`
//! - `3,5:yes` → comma-joined list of either form, arbitrary length
//!
//! Decoding is a total function: a token matching neither form yields no
//! reference rather than an error, preserving tolerant parsing of this
//! free-text column. "No match" is an explicit, testable outcome, not an
//! implicit default branch.

use winnow::{ModalResult, Parser, ascii::digit1, combinator::separated_pair, token::take_while};

/// One decoded dependency reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyReference {
    /// An unlabeled reference to a task id.
    Plain {
        /// The referenced task id.
        task_id: String,
    },
    /// A decision-branch reference: the connector from `task_id` carries
    /// `label` as its branch annotation.
    Decision {
        /// The referenced task id.
        task_id: String,
        /// The branch label.
        label: String,
    },
}

impl DependencyReference {
    /// Returns the referenced task id.
    pub fn task_id(&self) -> &str {
        match self {
            DependencyReference::Plain { task_id } => task_id,
            DependencyReference::Decision { task_id, .. } => task_id,
        }
    }

    /// Returns the decision-branch label, if this is a decision reference.
    pub fn label(&self) -> Option<&str> {
        match self {
            DependencyReference::Plain { .. } => None,
            DependencyReference::Decision { label, .. } => Some(label),
        }
    }
}

/// Parse a numeric task id (one or more ASCII digits).
fn task_id<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit1.parse_next(input)
}

/// Parse a branch label (one or more word characters).
fn branch_label<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse a decision token: task id, `:`, branch label.
fn decision<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(task_id, ':', branch_label).parse_next(input)
}

/// Decode a single dependency token.
///
/// The token must match one of the two forms in its entirety; anything else
/// (including the empty string) yields `None`.
fn decode_token(token: &str) -> Option<DependencyReference> {
    if let Ok((id, label)) = decision.parse(token) {
        return Some(DependencyReference::Decision {
            task_id: id.to_string(),
            label: label.to_string(),
        });
    }
    if let Ok(id) = task_id.parse(token) {
        return Some(DependencyReference::Plain {
            task_id: id.to_string(),
        });
    }
    None
}

/// Decode a raw `DependsOn` cell into its dependency references.
///
/// Comma-joined lists are subdivided first and each trimmed segment decoded
/// independently, preserving split order. Segments matching neither token
/// form are silently dropped.
pub fn decode(raw: &str) -> Vec<DependencyReference> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if raw.contains(',') {
        raw.split(',')
            .filter_map(|segment| decode_token(segment.trim()))
            .collect()
    } else {
        decode_token(raw).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_no_references() {
        assert!(decode("").is_empty());
        assert!(decode("   ").is_empty());
    }

    #[test]
    fn plain_token_yields_one_plain_reference() {
        assert_eq!(
            decode("42"),
            vec![DependencyReference::Plain {
                task_id: "42".to_string()
            }]
        );
    }

    #[test]
    fn decision_token_yields_one_decision_reference() {
        assert_eq!(
            decode("5:yes"),
            vec![DependencyReference::Decision {
                task_id: "5".to_string(),
                label: "yes".to_string()
            }]
        );
    }

    #[test]
    fn invalid_tokens_are_silently_dropped() {
        assert!(decode("x").is_empty());
        assert!(decode("3:").is_empty());
        assert!(decode(":yes").is_empty());
        assert!(decode("3:two words").is_empty());
        assert!(decode("3.5").is_empty());
    }

    #[test]
    fn comma_list_decodes_each_segment_in_order() {
        let refs = decode("3,5:ok,x");
        assert_eq!(
            refs,
            vec![
                DependencyReference::Plain {
                    task_id: "3".to_string()
                },
                DependencyReference::Decision {
                    task_id: "5".to_string(),
                    label: "ok".to_string()
                },
            ]
        );
    }

    #[test]
    fn list_segments_are_trimmed() {
        let refs = decode(" 1 , 2:no ");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].task_id(), "1");
        assert_eq!(refs[1].task_id(), "2");
        assert_eq!(refs[1].label(), Some("no"));
    }

    #[test]
    fn accessors_expose_id_and_label() {
        let plain = DependencyReference::Plain {
            task_id: "9".to_string(),
        };
        assert_eq!(plain.task_id(), "9");
        assert_eq!(plain.label(), None);
    }

    proptest! {
        #[test]
        fn any_digit_string_decodes_to_one_plain_reference(id in "[0-9]{1,8}") {
            let refs = decode(&id);
            prop_assert_eq!(refs.len(), 1);
            prop_assert_eq!(refs[0].task_id(), id.as_str());
            prop_assert_eq!(refs[0].label(), None);
        }

        #[test]
        fn any_id_label_pair_decodes_to_one_decision_reference(
            id in "[0-9]{1,8}",
            label in "[A-Za-z0-9_]{1,12}",
        ) {
            let refs = decode(&format!("{id}:{label}"));
            prop_assert_eq!(refs.len(), 1);
            prop_assert_eq!(refs[0].task_id(), id.as_str());
            prop_assert_eq!(refs[0].label(), Some(label.as_str()));
        }
    }
}
