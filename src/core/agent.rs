use super::position::GamePosition;

pub trait Agent<Position>
where
    Position: GamePosition,
{
    /// Returns the next move to play in the given position.
    /// The position must be left as it was found.
    fn next_action(&mut self, position: &mut Position) -> Option<Position::Move>;
}
