use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use choropleth::{ChoroplethPlugin, MapSettings, MapState};

/// Frames to let egui lay out both panels before capturing.
const SCREENSHOT_SETTLE_FRAMES: u32 = 30;
/// Frames to wait for the capture to reach disk before exiting.
const SCREENSHOT_FLUSH_FRAMES: u32 = 20;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "State Map".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(Color::WHITE))
    .insert_resource(MapSettings::load_or_default())
    .add_plugins((
        ChoroplethPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .add_systems(Startup, spawn_camera);

    // Screenshot mode: capture the ready map to the given path and exit
    if let Ok(path) = std::env::var("STATEMAP_SCREENSHOT") {
        app.insert_resource(ScreenshotRequest { path, frame: 0 })
            .add_systems(Update, drive_screenshot.run_if(in_state(MapState::Ready)));
    }

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[derive(Resource)]
struct ScreenshotRequest {
    path: String,
    frame: u32,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;
    if request.frame == SCREENSHOT_SETTLE_FRAMES {
        info!("Saving screenshot to {}", request.path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame > SCREENSHOT_SETTLE_FRAMES + SCREENSHOT_FLUSH_FRAMES {
        exit.send(AppExit::Success);
    }
}
