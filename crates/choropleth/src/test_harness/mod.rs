//! # TestMap: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `ChoroplethPlugin` so tests can feed inputs
//! and pointer events and then inspect the session, without a window.

mod assertions;
mod fixtures;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::attributes::Attribute;
use crate::events::{AttributeCycled, AttributeSelected, RegionPointer, Viewport};
use crate::loading::{InputArrived, InputPayload};
use crate::region::RegionCode;
use crate::session::MapSession;
use crate::settings::MapSettings;
use crate::{ChoroplethPlugin, MapState};

pub use fixtures::{
    fixture_outline, fixture_outline_geojson, fixture_records, fixture_regions,
    fixture_regions_geojson, FIXTURE_CSV,
};

/// A headless Bevy App wrapping `ChoroplethPlugin`.
pub struct TestMap {
    app: App,
}

impl Default for TestMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMap {
    /// An app in `MapState::Loading` with default settings and no inputs.
    pub fn new() -> Self {
        Self::with_settings(MapSettings::default())
    }

    /// Settings are inserted before the first update so startup load tasks
    /// see them.
    pub fn with_settings(settings: MapSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(settings);
        app.add_plugins(ChoroplethPlugin);
        app.update();
        Self { app }
    }

    /// Send the three fixture inputs and run until the session is built.
    pub fn loaded() -> Self {
        Self::new().with_fixture_inputs()
    }

    pub fn with_fixture_inputs(mut self) -> Self {
        self.send_input(InputPayload::Records(fixture_records()));
        self.send_input(InputPayload::Regions(fixture_regions()));
        self.send_input(InputPayload::Outline(fixture_outline()));
        self.run_until_ready(10);
        self
    }

    pub fn with_viewport(mut self, size: Vec2) -> Self {
        self.app.insert_resource(Viewport(size));
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn update(&mut self) {
        self.app.update();
    }

    /// Update until the state is `Ready` or `max_updates` have run. Yields
    /// between updates so `IoTaskPool` tasks can progress.
    pub fn run_until_ready(&mut self, max_updates: u32) -> bool {
        for _ in 0..max_updates {
            if self.state() == MapState::Ready {
                return true;
            }
            self.app.update();
            std::thread::yield_now();
        }
        self.state() == MapState::Ready
    }

    /// Send an input without updating.
    pub fn send_input(&mut self, payload: InputPayload) {
        self.app.world_mut().send_event(InputArrived(payload));
    }

    pub fn select(&mut self, attribute: Attribute) {
        self.app.world_mut().send_event(AttributeSelected(attribute));
        self.app.update();
    }

    pub fn cycle(&mut self, forward: bool) {
        self.app.world_mut().send_event(AttributeCycled { forward });
        self.app.update();
    }

    pub fn hover(&mut self, code: &str, position: Vec2) {
        self.pointer(RegionPointer::Enter {
            code: RegionCode::from(code),
            position,
        });
    }

    pub fn unhover(&mut self, code: &str) {
        self.pointer(RegionPointer::Leave {
            code: RegionCode::from(code),
        });
    }

    pub fn move_pointer(&mut self, position: Vec2) {
        self.pointer(RegionPointer::Move { position });
    }

    pub fn pointer(&mut self, event: RegionPointer) {
        self.app.world_mut().send_event(event);
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> MapState {
        *self.app.world().resource::<State<MapState>>().get()
    }

    pub fn has_session(&self) -> bool {
        self.app.world().contains_resource::<MapSession>()
    }

    /// Panics if the session has not been built.
    pub fn session(&self) -> &MapSession {
        self.app.world().resource::<MapSession>()
    }

    pub fn viewport(&self) -> Vec2 {
        self.app.world().resource::<Viewport>().0
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }
}
