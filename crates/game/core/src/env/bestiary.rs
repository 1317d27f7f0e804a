use crate::state::{StatSheet, Tick};

/// Template an autonomous entity is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: u16,
    pub name: String,
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: i32,
    pub hit_points: i32,
    pub move_time: Tick,
}

impl EnemyTemplate {
    pub fn stats(&self) -> StatSheet {
        StatSheet::new(self.attack, self.defense, self.hit_points)
    }
}

/// Regular enemies and bosses available to the level generator.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bestiary {
    pub regulars: Vec<EnemyTemplate>,
    pub bosses: Vec<EnemyTemplate>,
}

impl Bestiary {
    pub fn reference() -> Self {
        let template = |id, name: &str, attack, defense, hit_points| EnemyTemplate {
            id,
            name: name.to_string(),
            attack,
            defense,
            hit_points,
            move_time: Tick::from_millis(100),
        };

        Self {
            regulars: vec![
                template(0, "Cave Rat", 1, 0, 2),
                template(1, "Ghoul", 2, 0, 3),
            ],
            bosses: vec![template(100, "Crypt Warden", 3, 1, 12)],
        }
    }

    /// Looks a template up by id across regulars and bosses.
    pub fn template(&self, id: u16) -> Option<&EnemyTemplate> {
        self.regulars
            .iter()
            .chain(self.bosses.iter())
            .find(|template| template.id == id)
    }

    pub fn is_boss(&self, id: u16) -> bool {
        self.bosses.iter().any(|template| template.id == id)
    }
}
