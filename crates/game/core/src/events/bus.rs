use std::fmt;
use std::sync::Arc;

use crate::state::{EquipmentId, SlotKind};

/// Health and equipment changes shown on the HUD.
///
/// Always published after the state it describes has been mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HudEvent {
    /// Half-heart points were lost.
    Damaged { amount: u32, remaining: u32 },
    /// Half-heart points were restored.
    Healed { amount: u32, total: u32 },
    /// Heart capacity changed because of equipment.
    MaxHeartsChanged { max_halves: u32 },
    /// An item was placed in a slot, possibly replacing another.
    Equipped {
        slot: SlotKind,
        item: EquipmentId,
        replaced: Option<EquipmentId>,
    },
}

/// Receiver of [`HudEvent`]s.
pub trait HudObserver: Send + Sync {
    fn notify(&self, event: &HudEvent);
}

impl<F> HudObserver for F
where
    F: Fn(&HudEvent) + Send + Sync,
{
    fn notify(&self, event: &HudEvent) {
        self(event)
    }
}

/// Observer list. Cloning shares the registered observers.
#[derive(Clone, Default)]
pub struct EventBus {
    observers: Vec<Arc<dyn HudObserver>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn HudObserver>) {
        self.observers.push(observer);
    }

    /// Delivers `event` to every observer in subscription order.
    pub fn publish(&self, event: HudEvent) {
        for observer in &self.observers {
            observer.notify(&event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn every_observer_sees_every_event_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in 0..2u32 {
            let seen = Arc::clone(&seen);
            bus.subscribe(Arc::new(move |event: &HudEvent| {
                seen.lock().unwrap().push((tag, *event));
            }));
        }

        bus.publish(HudEvent::Damaged {
            amount: 1,
            remaining: 5,
        });
        bus.publish(HudEvent::MaxHeartsChanged { max_halves: 8 });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[1].0, 1);
        assert_eq!(seen[3].1, HudEvent::MaxHeartsChanged { max_halves: 8 });
    }

    #[test]
    fn clones_share_observers() {
        let mut bus = EventBus::new();
        bus.subscribe(Arc::new(|_: &HudEvent| {}));
        assert_eq!(bus.clone().observer_count(), 1);
    }
}
