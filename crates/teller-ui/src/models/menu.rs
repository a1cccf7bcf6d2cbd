//! Open/closed state of the mobile navigation menu

/// Menu visibility, mirrored onto the `active` class of the menu and toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Recovers the state from the menu element's `active` class
    #[must_use]
    pub const fn from_active(active: bool) -> Self {
        if active { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggled().toggled(), state);
            assert_ne!(state.toggled(), state);
        }
    }

    #[test]
    fn test_from_active() {
        assert!(MenuState::from_active(true).is_open());
        assert!(!MenuState::from_active(false).is_open());
        assert_eq!(MenuState::default(), MenuState::Closed);
    }
}
