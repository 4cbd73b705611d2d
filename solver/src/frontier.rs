use std::collections::VecDeque;
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::find::NodeReference;
use crate::grid::Direction;

/// The removal policy of a [`Frontier`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Discipline {
    /// Last in, first out
    #[default]
    DepthFirst,
    /// First in, first out
    BreadthFirst,
}

impl Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Discipline::DepthFirst => "DFS",
                Discipline::BreadthFirst => "BFS",
            }
        )
    }
}

impl FromStr for Discipline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Discipline::DepthFirst),
            "bfs" => Ok(Discipline::BreadthFirst),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An element of the search tree.
///
/// `parent` indexes the node arena kept by the path finder and is `None` only
/// for the root, which is also the only node without an action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<R> {
    pub state: R,
    pub parent: Option<usize>,
    pub action: Option<Direction>,
}

impl<R> Node<R> {
    pub fn root(state: R) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }
}

/// Nodes that have been discovered but not yet expanded.
#[derive(Debug)]
pub struct Frontier<R> {
    discipline: Discipline,
    nodes: VecDeque<Node<R>>,
}

impl<R: NodeReference> Frontier<R> {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            nodes: VecDeque::new(),
        }
    }

    pub fn add(&mut self, node: Node<R>) {
        self.nodes.push_back(node);
    }

    /// Whether any pending node holds `state`. Linear in the frontier size.
    pub fn contains_state(&self, state: R) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    pub fn empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Pending states, oldest first.
    pub fn states(&self) -> impl Iterator<Item = R> + '_ {
        self.nodes.iter().map(|node| node.state)
    }

    pub fn remove(&mut self) -> Result<Node<R>> {
        match self.discipline {
            Discipline::DepthFirst => self.nodes.pop_back(),
            Discipline::BreadthFirst => self.nodes.pop_front(),
        }
        .ok_or(Error::EmptyFrontier)
    }
}
