//! The weighted automaton: an arena of labeled states with a start state,
//! a final set and a derived alphabet.

use super::error::AutomatonError;
use super::state::{State, StateId, Transition};
use super::view::{EdgeView, StateView};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A labeled, weighted state machine.
///
/// States live in an arena indexed by [`StateId`] and are also reachable by
/// label. The start state is inserted at construction, so it always
/// resolves. Symbols enter the alphabet only through [`add_transition`].
///
/// # Example
///
/// ```rust
/// use allen_automata::Automaton;
///
/// let mut interval = Automaton::new("A", "u_a");
/// interval.add_state("li_a");
/// interval.add_state("d_a");
/// interval.mark_final("d_a");
/// interval.add_transition("u_a", "li_a", "la", 0.5).unwrap();
/// interval.add_transition("li_a", "d_a", "ra", 0.5).unwrap();
///
/// assert_eq!(interval.paths_to_final(), vec![vec!["la".to_string(), "ra".to_string()]]);
/// ```
///
/// [`add_transition`]: Automaton::add_transition
#[derive(Clone, Debug)]
pub struct Automaton {
    name: String,
    states: Vec<State>,
    index: HashMap<String, StateId>,
    start: StateId,
    finals: BTreeSet<StateId>,
    alphabet: BTreeSet<String>,
}

impl Automaton {
    /// Create an automaton containing only its start state.
    pub fn new(name: impl Into<String>, start: impl Into<String>) -> Self {
        let start = start.into();
        let mut index = HashMap::new();
        index.insert(start.clone(), StateId(0));

        Self {
            name: name.into(),
            states: vec![State::new(start)],
            index,
            start: StateId(0),
            finals: BTreeSet::new(),
            alphabet: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the automaton. Labels and transitions are unaffected.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Insert a state if `label` is not already known.
    ///
    /// Re-adding an existing label leaves it, and its transitions, untouched
    /// and returns the existing id.
    pub fn add_state(&mut self, label: &str) -> StateId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }

        let id = StateId(self.states.len());
        self.states.push(State::new(label));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Add `label` to the final set.
    ///
    /// Marking a label that is not a state is a no-op; the return value
    /// reports whether the label was known.
    pub fn mark_final(&mut self, label: &str) -> bool {
        match self.index.get(label) {
            Some(&id) => {
                self.finals.insert(id);
                true
            }
            None => false,
        }
    }

    /// Set `from`'s transition on `symbol` to `(to, probability)`.
    ///
    /// Both endpoints must already exist. A second call with the same
    /// `from` and `symbol` overwrites the first.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        symbol: &str,
        probability: f64,
    ) -> Result<(), AutomatonError> {
        let source = self.id_of(from).ok_or_else(|| AutomatonError::unknown(from))?;
        let target = self.id_of(to).ok_or_else(|| AutomatonError::unknown(to))?;

        self.alphabet.insert(symbol.to_string());
        self.states[source.0].set_transition(symbol, target, probability);
        Ok(())
    }

    pub fn id_of(&self, label: &str) -> Option<StateId> {
        self.index.get(label).copied()
    }

    pub fn state(&self, label: &str) -> Option<&State> {
        self.id_of(label).map(|id| &self.states[id.0])
    }

    /// Resolve an id, reporting inconsistent bookkeeping as `UnknownState`.
    pub fn state_at(&self, id: StateId) -> Result<&State, AutomatonError> {
        self.states
            .get(id.0)
            .ok_or_else(|| AutomatonError::unknown(id.to_string()))
    }

    pub fn start(&self) -> &State {
        &self.states[self.start.0]
    }

    pub fn start_id(&self) -> StateId {
        self.start
    }

    pub fn start_label(&self) -> &str {
        self.start().label()
    }

    pub fn is_final(&self, label: &str) -> bool {
        self.id_of(label).is_some_and(|id| self.is_final_id(id))
    }

    pub fn is_final_id(&self, id: StateId) -> bool {
        self.finals.contains(&id)
    }

    /// Labels of the final states, in insertion order of the states.
    pub fn final_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.finals.iter().map(|id| self.states[id.0].label())
    }

    /// Every symbol used on some transition, sorted.
    pub fn alphabet(&self) -> &BTreeSet<String> {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions().len()).sum()
    }

    /// All states with their start/final flags, for rendering.
    pub fn states(&self) -> impl Iterator<Item = StateView<'_>> + '_ {
        self.states.iter().enumerate().map(move |(i, state)| StateView {
            label: state.label(),
            is_start: StateId(i) == self.start,
            is_final: self.finals.contains(&StateId(i)),
        })
    }

    /// All edges as `(source, target, symbol, probability)`, for rendering.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.states.iter().flat_map(move |state| {
            state.transitions().iter().map(move |t| EdgeView {
                source: state.label(),
                target: self.states[t.target.0].label(),
                symbol: &t.symbol,
                probability: t.probability,
            })
        })
    }

    /// Every symbol sequence from the start whose last symbol enters a final
    /// state. Final states are not treated as sinks: the search continues
    /// through them.
    ///
    /// The automaton must be acyclic along every path reachable from the
    /// start; on a reachable cycle this never returns. Use
    /// [`paths_to_final_bounded`](Automaton::paths_to_final_bounded) when that
    /// is not known.
    pub fn paths_to_final(&self) -> Vec<Vec<String>> {
        // Depth errors only arise when a limit is supplied.
        self.collect_paths(None).unwrap_or_default()
    }

    /// Like [`paths_to_final`](Automaton::paths_to_final), but fails with
    /// `DepthExceeded` as soon as a path would grow past `max_depth` symbols.
    pub fn paths_to_final_bounded(
        &self,
        max_depth: usize,
    ) -> Result<Vec<Vec<String>>, AutomatonError> {
        self.collect_paths(Some(max_depth))
    }

    fn collect_paths(&self, limit: Option<usize>) -> Result<Vec<Vec<String>>, AutomatonError> {
        let mut paths = Vec::new();
        if self.is_final_id(self.start) {
            paths.push(Vec::new());
        }

        let mut path: Vec<&str> = Vec::new();
        let mut stack: Vec<(StateId, usize)> = vec![(self.start, 0)];

        while let Some(&(id, cursor)) = stack.last() {
            let transitions: &[Transition] = self.states[id.0].transitions();
            let Some(next) = transitions.get(cursor) else {
                stack.pop();
                path.pop();
                continue;
            };

            let top = stack.len() - 1;
            stack[top].1 += 1;

            if let Some(limit) = limit {
                if path.len() >= limit {
                    return Err(AutomatonError::DepthExceeded { limit });
                }
            }

            path.push(&next.symbol);
            if self.is_final_id(next.target) {
                paths.push(path.iter().map(|s| s.to_string()).collect());
            }
            stack.push((next.target, 0));
        }

        Ok(paths)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.states.iter().map(State::label).collect();
        write!(f, "State labels: {labels:?}")?;

        for state in &self.states {
            let edges: Vec<String> = state
                .transitions()
                .iter()
                .map(|t| {
                    format!(
                        "{}->{}->{}",
                        state.label(),
                        t.symbol,
                        self.states[t.target.0].label()
                    )
                })
                .collect();
            write!(f, "\n{}:{edges:?}", state.label())?;
        }

        Ok(())
    }
}
