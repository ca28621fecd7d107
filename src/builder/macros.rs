//! Macros for compact automaton declarations.

/// Declare an automaton inline.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<Automaton, AutomatonError>`.
///
/// # Example
///
/// ```
/// use allen_automata::automaton;
///
/// let interval = automaton! {
///     name: "A",
///     start: "u_a",
///     final: ["d_a"],
///     transitions: [
///         ("u_a", "li_a", "la", 0.5),
///         ("li_a", "d_a", "ra", 0.5),
///     ]
/// }
/// .unwrap();
///
/// assert_eq!(interval.state_count(), 3);
/// ```
#[macro_export]
macro_rules! automaton {
    (
        $(name: $name:expr,)?
        start: $start:expr,
        $(final: [$($final:expr),* $(,)?],)?
        transitions: [
            $(($from:expr, $to:expr, $symbol:expr, $probability:expr)),* $(,)?
        ] $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new();
        $(let builder = builder.name($name);)?
        let builder = builder.start($start);
        $(let builder = builder.transition($from, $to, $symbol, $probability);)*
        $($(let builder = builder.final_state($final);)*)?
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::AutomatonError;

    #[test]
    fn automaton_macro_builds_chain() {
        let chain = automaton! {
            start: "a",
            final: ["c"],
            transitions: [
                ("a", "b", "x", 1.0),
                ("b", "c", "y", 1.0),
            ]
        }
        .unwrap();

        assert_eq!(chain.name(), "a");
        assert_eq!(chain.paths_to_final(), vec![vec!["x".to_string(), "y".to_string()]]);
    }

    #[test]
    fn automaton_macro_works_without_finals() {
        let lone = automaton! {
            name: "lone",
            start: "only",
            transitions: []
        }
        .unwrap();

        assert_eq!(lone.state_count(), 1);
        assert_eq!(lone.final_labels().count(), 0);
    }

    #[test]
    fn automaton_macro_propagates_errors() {
        let result = automaton! {
            start: "a",
            final: ["missing"],
            transitions: [("a", "b", "x", 0.5)]
        };

        assert!(matches!(result, Err(AutomatonError::UnknownState { .. })));
    }
}
