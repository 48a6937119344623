//! Sequential numbering state shared with the line parser.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node/element bookkeeping consumed and advanced by the parser as it walks
/// the raw node and element lines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Numbering {
    pub node_counter: u32,
    pub element_counter: u32,
    pub size_of_nodes: usize,
    pub size_of_elements: usize,
}

impl Default for Numbering {
    fn default() -> Self {
        // 1-based counters to match input-file numbering
        Self {
            node_counter: 1,
            element_counter: 1,
            size_of_nodes: 0,
            size_of_elements: 0,
        }
    }
}

impl Numbering {
    /// Hand out the current node number and advance the counter.
    pub fn next_node_id(&mut self) -> u32 {
        let id = self.node_counter;
        self.node_counter += 1;
        id
    }

    /// Hand out the current element number and advance the counter.
    pub fn next_element_id(&mut self) -> u32 {
        let id = self.element_counter;
        self.element_counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let n = Numbering::default();
        assert_eq!(n.node_counter, 1);
        assert_eq!(n.element_counter, 1);
        assert_eq!(n.size_of_nodes, 0);
        assert_eq!(n.size_of_elements, 0);
    }

    #[test]
    fn counters_advance_independently() {
        let mut n = Numbering::default();
        assert_eq!(n.next_node_id(), 1);
        assert_eq!(n.next_node_id(), 2);
        assert_eq!(n.next_element_id(), 1);
        assert_eq!(n.node_counter, 3);
        assert_eq!(n.element_counter, 2);
    }
}
