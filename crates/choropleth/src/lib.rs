//! Coordinated choropleth map and bar chart.
//!
//! Tabular records are joined onto region geometry by region code, colored
//! through a scale built from the expressed attribute, and shown in two
//! panels that highlight together. `MapSession` owns all of it; the plugin
//! feeds it events.

use bevy::prelude::*;

pub mod attributes;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod highlight;
pub mod join;
pub mod loading;
pub mod palette;
pub mod region;
pub mod scale;
pub mod session;
pub mod settings;
pub mod systems;
pub mod tabular;
pub mod view;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use attributes::{Attribute, AttributeRegistry, ALL_ATTRIBUTES};
pub use error::{LoadError, SelectionError};
pub use events::{
    AttributeCycled, AttributeSelected, LabelMeasured, MapReady, RegionPointer, Viewport,
};
pub use loading::{InputArrived, InputPayload, PendingInputs};
pub use region::{Feature, Record, RegionCode};
pub use session::{MapInputs, MapSession};
pub use settings::MapSettings;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapState {
    /// Waiting for records, outline and regions.
    #[default]
    Loading,
    Ready,
}

/// Systems that mutate the session. UI that reads it should run after.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapUpdateSet;

pub struct ChoroplethPlugin;

impl Plugin for ChoroplethPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MapState>()
            .init_resource::<MapSettings>()
            .init_resource::<PendingInputs>()
            .init_resource::<Viewport>()
            .add_event::<InputArrived>()
            .add_event::<MapReady>()
            .add_event::<AttributeSelected>()
            .add_event::<AttributeCycled>()
            .add_event::<RegionPointer>()
            .add_event::<LabelMeasured>()
            .add_systems(Startup, loading::spawn_load_tasks)
            .add_systems(
                Update,
                (
                    loading::poll_load_tasks,
                    loading::collect_arrived_inputs,
                    loading::assemble_session,
                )
                    .chain()
                    .run_if(in_state(MapState::Loading)),
            )
            .add_systems(
                Update,
                (
                    systems::apply_attribute_selection,
                    systems::apply_region_pointer,
                    systems::apply_label_size,
                )
                    .chain()
                    .in_set(MapUpdateSet)
                    .run_if(in_state(MapState::Ready)),
            );
    }
}
