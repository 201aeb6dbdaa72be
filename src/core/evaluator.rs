pub trait PositionEvaluator<Position> {
    /// Evaluates a position into a Score
    fn eval(&self, position: &Position) -> super::value::Score;
}
