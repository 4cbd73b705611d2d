use std::fmt::Debug;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frontier::{Discipline, Frontier, Node};
use crate::grid::{CellStorage, Direction, Maze, Point};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is valid
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the passable neighbors of the provided node and the action
    /// required to go there
    fn neighbors_of(
        &self,
        node: Self::Reference,
    ) -> impl Iterator<Item = (Direction, Self::Reference)>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn is_valid(&self, node: Self::Reference) -> bool;
    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// The moves leading from start to goal and the cells they visit. The start
/// cell is not included, the goal cell is the last one.
#[derive(Debug, PartialEq, Clone, Eq, Serialize, Deserialize)]
pub struct Solution<R> {
    pub actions: Vec<Direction>,
    pub cells: Vec<R>,
}

impl<R> Solution<R> {
    /// Number of actions, i.e. path edges.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R> {
    Computing,
    NoPathFound,
    PathFound(Solution<R>),
}

impl<R> PathFinderState<R> {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// What a finished [`PathFinder`] leaves behind.
#[derive(Debug)]
pub struct SearchOutcome<R, S> {
    pub state: PathFinderState<R>,
    pub explored: S,
    pub num_explored: usize,
}

/// Uninformed tree search over a [`MapTrait`], driven one frontier removal at a
/// time.
#[derive(Debug)]
pub struct PathFinder<
    R: NodeReference,
    S: MapStorage<bool, Reference = R>,
    M: MapTrait<Reference = R, Storage<bool> = S>,
> {
    goal: R,
    frontier: Frontier<R>,
    // nodes that have been removed from the frontier, indexed by `Node::parent`
    expanded: Vec<Node<R>>,
    explored: S,
    num_explored: usize,
    state: PathFinderState<R>,
    _map: std::marker::PhantomData<M>,
}

impl<
        R: NodeReference,
        S: MapStorage<bool, Reference = R>,
        M: MapTrait<Reference = R, Storage<bool> = S>,
    > PathFinder<R, S, M>
{
    pub fn new(map: &M, start: R, goal: R, discipline: Discipline) -> Self {
        debug!("searching {:?} -> {:?} using {}", start, goal, discipline);

        let mut frontier = Frontier::new(discipline);
        frontier.add(Node::root(start));

        Self {
            goal,
            frontier,
            expanded: Vec::new(),
            explored: map.create_storage::<bool>(),
            num_explored: 0,
            state: PathFinderState::Computing,
            _map: std::marker::PhantomData,
        }
    }

    pub fn finish(mut self, map: &M) -> Result<SearchOutcome<R, S>> {
        while !self.step(map)?.is_done() {}

        Ok(SearchOutcome {
            state: self.state,
            explored: self.explored,
            num_explored: self.num_explored,
        })
    }

    pub fn step(&mut self, map: &M) -> Result<&PathFinderState<R>> {
        if self.state.is_done() {
            return Ok(&self.state);
        }

        if self.frontier.empty() {
            debug!("no path found after exploring {} states", self.num_explored);
            self.state = PathFinderState::NoPathFound;
            return Ok(&self.state);
        }

        let node = self.frontier.remove()?;
        self.num_explored += 1;

        // the goal test happens before expansion, so start == goal yields an empty solution
        if node.state == self.goal {
            let solution = self.backtrack(&node);
            debug!(
                "found goal after exploring {} states, path has {} actions",
                self.num_explored,
                solution.len()
            );
            self.state = PathFinderState::PathFound(solution);
            return Ok(&self.state);
        }

        trace!("expanding {:?}", node.state);
        *self.explored.get_mut(node.state) = true;

        let current = node.state;
        let index = self.expanded.len();
        self.expanded.push(node);

        for (action, state) in map.neighbors_of(current) {
            if !self.frontier.contains_state(state) && !self.explored.get(state) {
                trace!("queueing {:?} ({} of {:?})", state, action, current);
                self.frontier.add(Node {
                    state,
                    parent: Some(index),
                    action: Some(action),
                });
            }
        }

        Ok(&self.state)
    }

    /// Walk the parent links back to the root and return the path in
    /// start-to-goal order.
    fn backtrack(&self, goal: &Node<R>) -> Solution<R> {
        let mut actions = Vec::new();
        let mut cells = Vec::new();

        let mut node = goal;
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            actions.push(action);
            cells.push(node.state);
            node = &self.expanded[parent];
        }

        actions.reverse();
        cells.reverse();

        Solution { actions, cells }
    }

    pub fn state(&self) -> &PathFinderState<R> {
        &self.state
    }

    pub fn explored(&self) -> &S {
        &self.explored
    }

    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    pub fn frontier(&self) -> &Frontier<R> {
        &self.frontier
    }
}

/// A successful search of a [`Maze`].
#[derive(Debug, Clone)]
pub struct Solved {
    pub solution: Solution<Point>,
    pub explored: CellStorage<bool>,
    pub num_explored: usize,
}

/// Search `maze` from its start to its goal.
///
/// Fails with [`Error::NoSolution`] when the frontier runs dry.
pub fn solve(maze: &Maze, discipline: Discipline) -> Result<Solved> {
    let outcome = PathFinder::new(maze, maze.start(), maze.goal(), discipline).finish(maze)?;

    match outcome.state {
        PathFinderState::PathFound(solution) => Ok(Solved {
            solution,
            explored: outcome.explored,
            num_explored: outcome.num_explored,
        }),
        _ => Err(Error::NoSolution),
    }
}
