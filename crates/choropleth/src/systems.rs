use bevy::prelude::*;

use crate::events::{AttributeCycled, AttributeSelected, LabelMeasured, RegionPointer, Viewport};
use crate::session::MapSession;

pub fn apply_attribute_selection(
    mut selected: EventReader<AttributeSelected>,
    mut cycled: EventReader<AttributeCycled>,
    mut session: ResMut<MapSession>,
) {
    for AttributeSelected(attribute) in selected.read() {
        if let Err(e) = session.select_attribute(*attribute) {
            warn!("Ignoring selection: {e}");
        }
    }
    for cycle in cycled.read() {
        session.cycle_attribute(cycle.forward);
    }
}

/// Apply pointer transitions in arrival order.
pub fn apply_region_pointer(
    mut pointer: EventReader<RegionPointer>,
    viewport: Res<Viewport>,
    mut session: ResMut<MapSession>,
) {
    for event in pointer.read() {
        match event {
            RegionPointer::Enter { code, position } => session.enter(code, *position, viewport.0),
            RegionPointer::Leave { code } => session.leave(code),
            RegionPointer::Move { position } => session.move_label(*position, viewport.0),
        }
    }
}

pub fn apply_label_size(mut measured: EventReader<LabelMeasured>, mut session: ResMut<MapSession>) {
    if let Some(LabelMeasured(size)) = measured.read().last() {
        session.set_label_size(*size);
    }
}
