//! Item pickup: any item overlapping the player is applied once and removed.

use hecs::{Entity, World};
use log::debug;

use superduck_core::events::SimEvent;
use superduck_core::types::{rects_intersect, Position};

use crate::components::{Body, Item, PlayerState};

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let player = {
        let mut query = world.query::<(&Position, &Body, &PlayerState)>();
        let found = query
            .iter()
            .find(|(_, (_, body, _))| !body.removed)
            .map(|(entity, (pos, body, _))| (entity, *pos, body.size()));
        found
    };
    let Some((player_entity, player_pos, player_size)) = player else {
        return;
    };

    let mut collected: Vec<Item> = Vec::new();
    for (_entity, (pos, body, item)) in world.query_mut::<(&Position, &mut Body, &Item)>() {
        if body.removed || !rects_intersect(*pos, body.size(), player_pos, player_size) {
            continue;
        }
        body.removed = true;
        collected.push(*item);
    }

    apply_items(world, player_entity, &collected, events);
}

fn apply_items(world: &World, player: Entity, items: &[Item], events: &mut Vec<SimEvent>) {
    let Ok(mut state) = world.get::<&mut PlayerState>(player) else {
        return;
    };
    for item in items {
        item.apply(&mut state);
        debug!("player collected {:?}", item.kind);
        events.push(SimEvent::ItemCollected { item: item.kind });
    }
}
