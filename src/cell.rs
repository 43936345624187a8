/// The state of a single grid cell.
///
/// `Dead` is the default so a freshly allocated buffer is an empty world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The character this cell renders as: a filled square when alive, a
    /// period when dead.
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => '■',
            Cell::Dead => '.',
        }
    }
}
