use crate::state::{BodyRef, EntityId};

/// What a blocked controlled move turns into.
///
/// Categories are tested in [`Interaction::PRIORITY`] order and only the first
/// match fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Chop an inner wall.
    Obstacle(EntityId),
    /// Equip the item lying on the cell.
    Pickup(EntityId),
    /// Attack an autonomous entity.
    Hostile(EntityId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Obstacle,
    Pickup,
    Hostile,
}

impl Interaction {
    const PRIORITY: [Category; 3] = [Category::Obstacle, Category::Pickup, Category::Hostile];

    /// Resolves the bodies standing on a blocked cell to a single interaction.
    ///
    /// Boundaries and the controlled entity never produce one.
    pub fn classify(bodies: impl IntoIterator<Item = BodyRef>) -> Option<Self> {
        let bodies: Vec<BodyRef> = bodies.into_iter().collect();
        Self::PRIORITY.iter().find_map(|category| {
            bodies.iter().find_map(|body| match (category, body) {
                (Category::Obstacle, BodyRef::Obstacle(id)) => Some(Interaction::Obstacle(*id)),
                (Category::Pickup, BodyRef::Equipment(id)) => Some(Interaction::Pickup(*id)),
                (Category::Hostile, BodyRef::Autonomous(id)) => Some(Interaction::Hostile(*id)),
                _ => None,
            })
        })
    }

    pub fn target(self) -> EntityId {
        match self {
            Interaction::Obstacle(id) | Interaction::Pickup(id) | Interaction::Hostile(id) => id,
        }
    }
}
