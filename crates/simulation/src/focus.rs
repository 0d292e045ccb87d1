use bevy::prelude::*;

use crate::train::TrainId;

/// Which train the camera tracks. `None` is the overview of the whole rail.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusSelection(pub Option<TrainId>);

impl FocusSelection {
    pub fn focused(&self) -> Option<TrainId> {
        self.0
    }

    pub fn is_focused(&self) -> bool {
        self.0.is_some()
    }

    pub fn set(&mut self, id: TrainId) {
        self.0 = Some(id);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overview() {
        let focus = FocusSelection::default();
        assert!(!focus.is_focused());
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_set_replaces_previous_focus() {
        let mut focus = FocusSelection::default();
        focus.set(TrainId::new(2).unwrap());
        focus.set(TrainId::new(5).unwrap());
        assert_eq!(focus.focused(), TrainId::new(5));
        focus.clear();
        assert_eq!(focus.focused(), None);
    }
}
