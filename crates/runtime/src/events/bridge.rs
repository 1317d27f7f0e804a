use crawler_core::{HudEvent, HudObserver};

use super::{Event, EventBus};

/// Forwards HUD notifications from a floor onto the runtime bus.
#[derive(Clone)]
pub struct HudBridge {
    bus: EventBus,
}

impl HudBridge {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl HudObserver for HudBridge {
    fn notify(&self, event: &HudEvent) {
        self.bus.publish(Event::Hud(*event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;

    #[tokio::test]
    async fn core_notifications_land_on_the_hud_topic() {
        let bus = EventBus::new();
        let mut hud = bus.subscribe(Topic::Hud);

        let mut core_bus = crawler_core::EventBus::new();
        core_bus.subscribe(std::sync::Arc::new(HudBridge::new(bus)));
        core_bus.publish(HudEvent::Healed {
            amount: 2,
            total: 6,
        });

        assert!(matches!(
            hud.recv().await.unwrap(),
            Event::Hud(HudEvent::Healed { amount: 2, total: 6 })
        ));
    }
}
