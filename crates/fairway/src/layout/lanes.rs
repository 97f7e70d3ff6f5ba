//! Lane assignment: one horizontal lane per distinct owner persona.

use indexmap::IndexMap;

use fairway_core::task::TaskRow;

/// Mapping from owner personas to dense lane indices.
///
/// Indices start at 0 and reflect the order in which each persona first
/// appears among the task rows; the insertion-order-preserving map makes
/// that invariant structural rather than incidental. Lanes are derived
/// purely from the rows, never from an external persona list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneMap {
    lanes: IndexMap<String, usize>,
}

impl LaneMap {
    /// Scan the rows in table order and assign each distinct persona the
    /// next lane index.
    pub fn assign(rows: &[TaskRow]) -> Self {
        let mut lanes = IndexMap::new();
        for row in rows {
            let next_index = lanes.len();
            lanes.entry(row.owner().to_string()).or_insert(next_index);
        }
        Self { lanes }
    }

    /// Returns the lane index assigned to a persona, if any.
    pub fn index_of(&self, persona: &str) -> Option<usize> {
        self.lanes.get(persona).copied()
    }

    /// Returns the number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Returns `true` if no lanes were assigned.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterates over `(persona, lane index)` pairs in lane-index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lanes.iter().map(|(persona, index)| (persona.as_str(), *index))
    }

    /// Iterates over personas in lane-index order.
    pub fn personas(&self) -> impl Iterator<Item = &str> {
        self.lanes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::task::TaskKind;

    fn row(id: &str, owner: &str) -> TaskRow {
        TaskRow::new(id, "Planning", "task", TaskKind::Task, owner, "")
    }

    #[test]
    fn lanes_follow_first_appearance_order() {
        let rows = vec![
            row("1", "A"),
            row("2", "B"),
            row("3", "A"),
            row("4", "C"),
        ];
        let lanes = LaneMap::assign(&rows);

        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes.index_of("A"), Some(0));
        assert_eq!(lanes.index_of("B"), Some(1));
        assert_eq!(lanes.index_of("C"), Some(2));
    }

    #[test]
    fn repeat_personas_keep_their_first_index() {
        let rows = vec![row("1", "A"), row("2", "A"), row("3", "A")];
        let lanes = LaneMap::assign(&rows);

        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes.index_of("A"), Some(0));
    }

    #[test]
    fn unseen_persona_has_no_lane() {
        let lanes = LaneMap::assign(&[row("1", "A")]);
        assert_eq!(lanes.index_of("Z"), None);
    }

    #[test]
    fn iteration_is_in_lane_order() {
        let rows = vec![row("1", "B"), row("2", "A")];
        let lanes = LaneMap::assign(&rows);

        let personas: Vec<&str> = lanes.personas().collect();
        assert_eq!(personas, vec!["B", "A"]);

        let pairs: Vec<(&str, usize)> = lanes.iter().collect();
        assert_eq!(pairs, vec![("B", 0), ("A", 1)]);
    }

    #[test]
    fn empty_rows_yield_empty_map() {
        let lanes = LaneMap::assign(&[]);
        assert!(lanes.is_empty());
    }
}
