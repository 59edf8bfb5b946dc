/// Reducer - pure function that produces new state from current state + action
///
/// Reducers must be total: an action they do not recognize returns the input
/// state unchanged.
///
/// Any `Fn(S, &A) -> S` is a reducer, so plain functions work directly:
///
/// ```rust
/// use redux_store::Reducer;
///
/// enum Step {
///     Up,
///     Down,
/// }
///
/// fn counter(state: i64, action: &Step) -> i64 {
///     match action {
///         Step::Up => state + 1,
///         Step::Down => state - 1,
///     }
/// }
///
/// assert_eq!(counter.reduce(1, &Step::Up), 2);
/// assert_eq!(counter.reduce(1, &Step::Down), 0);
/// ```
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}
