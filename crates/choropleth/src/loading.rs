//! Asynchronous arrival of the three data inputs.
//!
//! Records, outline and regions arrive as `InputArrived` events in any
//! order. They are sent by the host directly, or produced by file-load
//! tasks when `MapSettings::sources` is set. Once all three are present the
//! session is built in one step and the state moves to `Ready`.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::tasks::{block_on, IoTaskPool, Task};

use crate::attributes::AttributeRegistry;
use crate::error::LoadError;
use crate::events::MapReady;
use crate::geometry::{decode_outline, decode_regions, Geometry};
use crate::palette::Palette;
use crate::region::{Feature, Record};
use crate::session::{MapInputs, MapSession};
use crate::settings::{DataSources, MapSettings};
use crate::tabular::parse_records;
use crate::MapState;

#[derive(Debug, Clone, PartialEq)]
pub enum InputPayload {
    Records(Vec<Record>),
    Outline(Geometry),
    Regions(Vec<Feature>),
}

impl InputPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Records(_) => "records",
            Self::Outline(_) => "outline",
            Self::Regions(_) => "regions",
        }
    }
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct InputArrived(pub InputPayload);

/// Inputs received so far. A second arrival of the same kind replaces the
/// first.
#[derive(Resource, Debug, Default)]
pub struct PendingInputs {
    records: Option<Vec<Record>>,
    outline: Option<Geometry>,
    regions: Option<Vec<Feature>>,
}

impl PendingInputs {
    pub fn accept(&mut self, payload: InputPayload) {
        match payload {
            InputPayload::Records(r) => self.records = Some(r),
            InputPayload::Outline(o) => self.outline = Some(o),
            InputPayload::Regions(f) => self.regions = Some(f),
        }
    }

    /// Which inputs have arrived, for progress display.
    pub fn status(&self) -> [(&'static str, bool); 3] {
        [
            ("records", self.records.is_some()),
            ("outline", self.outline.is_some()),
            ("regions", self.regions.is_some()),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.records.is_some() && self.outline.is_some() && self.regions.is_some()
    }

    /// Hand over all three inputs once they are present.
    pub fn take_complete(&mut self) -> Option<MapInputs> {
        if !self.is_complete() {
            return None;
        }
        Some(MapInputs {
            records: self.records.take()?,
            outline: self.outline.take()?,
            regions: self.regions.take()?,
        })
    }
}

/// A file being read and decoded off the main thread.
#[derive(Component)]
pub struct LoadTask {
    source: PathBuf,
    task: Task<Result<InputPayload, LoadError>>,
}

#[derive(Debug, Clone, Copy)]
enum InputKind {
    Records,
    Outline,
    Regions,
}

fn read_input(kind: InputKind, path: &Path, sources: &DataSources) -> Result<InputPayload, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(match kind {
        InputKind::Records => InputPayload::Records(parse_records(&text, &sources.key_field)?),
        InputKind::Outline => {
            InputPayload::Outline(decode_outline(&text, sources.outline_object.as_deref())?)
        }
        InputKind::Regions => InputPayload::Regions(decode_regions(
            &text,
            &sources.key_field,
            sources.regions_object.as_deref(),
        )?),
    })
}

/// Start one load task per configured source.
pub fn spawn_load_tasks(mut commands: Commands, settings: Res<MapSettings>) {
    let Some(sources) = settings.sources.as_ref() else {
        return;
    };
    let pool = IoTaskPool::get();
    for (kind, path) in [
        (InputKind::Records, &sources.records),
        (InputKind::Outline, &sources.outline),
        (InputKind::Regions, &sources.regions),
    ] {
        let source = path.clone();
        let task_path = path.clone();
        let task_sources = sources.clone();
        let task = pool.spawn(async move { read_input(kind, &task_path, &task_sources) });
        commands.spawn(LoadTask { source, task });
    }
}

/// Turn finished load tasks into `InputArrived` events.
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadTask)>,
    mut arrived: EventWriter<InputArrived>,
) {
    for (entity, mut load) in &mut tasks {
        let Some(result) = block_on(futures_lite::future::poll_once(&mut load.task)) else {
            continue;
        };
        match result {
            Ok(payload) => {
                arrived.send(InputArrived(payload));
            }
            Err(e) => error!("Failed to load {}: {e}", load.source.display()),
        }
        commands.entity(entity).despawn();
    }
}

pub fn collect_arrived_inputs(
    mut events: EventReader<InputArrived>,
    mut pending: ResMut<PendingInputs>,
) {
    for InputArrived(payload) in events.read() {
        info!("Received {} input", payload.kind());
        pending.accept(payload.clone());
    }
}

/// Build the session as soon as every input is present.
pub fn assemble_session(
    mut commands: Commands,
    mut pending: ResMut<PendingInputs>,
    settings: Res<MapSettings>,
    mut ready: EventWriter<MapReady>,
    mut next_state: ResMut<NextState<MapState>>,
) {
    let Some(inputs) = pending.take_complete() else {
        return;
    };
    let registry = settings.registry().unwrap_or_else(|e| {
        warn!("Using default attributes: {e}");
        AttributeRegistry::default()
    });
    let palette = settings.palette().unwrap_or_else(|e| {
        warn!("Using default palette: {e}");
        Palette::default()
    });
    let session = MapSession::build(inputs, registry, palette, settings.schedule, settings.layout());
    commands.insert_resource(session);
    ready.send(MapReady);
    next_state.set(MapState::Ready);
}
