use super::{Position, Tick};

/// Per-entity interpolation state between two cells.
///
/// The logical position changes as soon as a move starts; `Motion` only tells
/// presentation where the sprite is and keeps a second move from starting
/// while the first is still in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    #[default]
    Idle,
    Moving {
        from: Position,
        to: Position,
        started_at: Tick,
        duration: Tick,
    },
}

impl Motion {
    pub fn start(from: Position, to: Position, now: Tick, duration: Tick) -> Self {
        Motion::Moving {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Motion::Moving { .. })
    }

    /// Fraction of the move completed at `now`, in `[0, 1]`. Idle is complete.
    pub fn progress(&self, now: Tick) -> f32 {
        match *self {
            Motion::Idle => 1.0,
            Motion::Moving {
                started_at,
                duration,
                ..
            } => {
                if duration == Tick::ZERO {
                    return 1.0;
                }
                let elapsed = now.saturating_sub(started_at).as_millis() as f32;
                (elapsed / duration.as_millis() as f32).min(1.0)
            }
        }
    }

    /// Settles the motion once its duration has elapsed.
    ///
    /// Returns the arrival cell when the move finishes on this call.
    pub fn advance(&mut self, now: Tick) -> Option<Position> {
        match *self {
            Motion::Moving {
                to,
                started_at,
                duration,
                ..
            } if now >= started_at + duration => {
                *self = Motion::Idle;
                Some(to)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_after_duration() {
        let mut motion = Motion::start(
            Position::new(0, 0),
            Position::new(1, 0),
            Tick(100),
            Tick(100),
        );

        assert!(motion.is_moving());
        assert_eq!(motion.advance(Tick(150)), None);
        assert!((motion.progress(Tick(150)) - 0.5).abs() < f32::EPSILON);

        assert_eq!(motion.advance(Tick(200)), Some(Position::new(1, 0)));
        assert!(!motion.is_moving());
        assert_eq!(motion.advance(Tick(300)), None);
    }
}
