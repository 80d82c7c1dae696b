// Drag gesture state tracked between a start event and its matching end event.

/// Whether a rotation drag is in progress, and the angles captured when it began.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Rotating {
        /// `current_alpha` at the moment the gesture started.
        rotation_start: f64,
        /// Pointer angle at the moment the gesture started. `None` while the
        /// pointer has only been seen at the exact center, where the angle is
        /// undefined.
        user_rotation_start: Option<f64>,
    },
}

impl GestureState {
    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    /// Start snapshot of the rotation angle, 0 while idle.
    pub fn rotation_start(&self) -> f64 {
        match *self {
            Self::Rotating { rotation_start, .. } => rotation_start,
            Self::Idle => 0.0,
        }
    }

    /// Start snapshot of the pointer angle, 0 while idle or not yet known.
    pub fn user_rotation_start(&self) -> f64 {
        match *self {
            Self::Rotating {
                user_rotation_start,
                ..
            } => user_rotation_start.unwrap_or(0.0),
            Self::Idle => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_reports_zero_snapshots() {
        let s = GestureState::default();
        assert!(!s.is_rotating());
        assert_eq!(s.rotation_start(), 0.0);
        assert_eq!(s.user_rotation_start(), 0.0);
    }

    #[test]
    fn rotating_exposes_snapshots() {
        let s = GestureState::Rotating {
            rotation_start: 45.0,
            user_rotation_start: Some(270.0),
        };
        assert!(s.is_rotating());
        assert_eq!(s.rotation_start(), 45.0);
        assert_eq!(s.user_rotation_start(), 270.0);
    }

    #[test]
    fn pending_pointer_angle_reads_as_zero() {
        let s = GestureState::Rotating {
            rotation_start: 45.0,
            user_rotation_start: None,
        };
        assert!(s.is_rotating());
        assert_eq!(s.user_rotation_start(), 0.0);
    }
}
