//! egui front end: attribute menu, the two panels, info label, legend and
//! the loading overlay.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use choropleth::{MapState, MapUpdateSet};

pub mod attribute_menu;
pub mod info_label;
pub mod legend;
pub mod loading_screen;
pub mod theme;
pub mod views;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<loading_screen::LoadingAnimation>()
            .init_resource::<views::HoverTracker>()
            .add_systems(Startup, theme::apply_map_theme)
            .add_systems(
                Update,
                loading_screen::loading_screen_ui.run_if(in_state(MapState::Loading)),
            )
            .add_systems(
                Update,
                (
                    attribute_menu::attribute_keybinds,
                    attribute_menu::attribute_menu_ui,
                    views::views_ui,
                    info_label::info_label_ui,
                    legend::legend_ui,
                )
                    .chain()
                    .after(MapUpdateSet)
                    .run_if(in_state(MapState::Ready)),
            );
    }
}
