use gymnasium::Discrete;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Left, Action::Down, Action::Right, Action::Up];

    pub fn from_index(a: Discrete) -> Option<Self> {
        Self::ALL.get(a).copied()
    }

    pub fn index(self) -> Discrete {
        self as Discrete
    }

    /// Headings the agent may actually take on slippery ice: the two
    /// neighbours under rotation and the intended one, in `[a-1, a, a+1]` order.
    pub fn slip_headings(self) -> [Action; 3] {
        let a = self.index();
        [
            Self::ALL[(a + 3) % 4],
            self,
            Self::ALL[(a + 1) % 4],
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "Left",
            Action::Down => "Down",
            Action::Right => "Right",
            Action::Up => "Up",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Action::Left => '⬅',
            Action::Down => '⬇',
            Action::Right => '➡',
            Action::Up => '⬆',
        }
    }
}
