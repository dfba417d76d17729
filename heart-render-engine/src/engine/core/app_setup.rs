use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::DEFAULT_CLEAR_COLOUR;

// Crate engine modules
use crate::engine::assets::heart_manifest::HeartManifest;
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::heart_creator::create_heart_when_ready;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::render::sprite_material::HeartSpriteMaterial;
use crate::engine::systems::animation::animate_heart;
use crate::engine::systems::fps_tracking::{fps_notification_system, fps_text_update_system};
use crate::engine::systems::frame_loop::{
    HeartFrameLoop, advance_frame_loop, handle_pause_shortcut, start_frame_loop,
};
use crate::engine::systems::overlays::{Overlays, handle_overlay_shortcuts, tick_overlays};
use crate::engine::systems::viewport::{ViewportState, handle_viewport_resize};
// Create Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<HeartSpriteMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<HeartManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    app.init_state::<AppState>()
        .init_resource::<ManifestLoader>()
        .init_resource::<LoadingProgress>()
        .init_resource::<HeartFrameLoop>()
        .init_resource::<Overlays>()
        .init_resource::<ViewportState>()
        .insert_resource(ClearColor(DEFAULT_CLEAR_COLOUR))
        .add_systems(Startup, (start_loading, setup))
        .add_systems(
            Update,
            (
                load_manifest_system,
                create_heart_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), start_frame_loop)
        .add_systems(
            Update,
            (advance_frame_loop, animate_heart)
                .chain()
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (
                handle_viewport_resize,
                tick_overlays,
                handle_overlay_shortcuts,
                handle_pause_shortcut.run_if(in_state(AppState::Running)),
                fps_notification_system,
                fps_text_update_system,
            ),
        );

    app
}

// Startup system that only handles basic initialisation
#[allow(unused_mut, unused_variables)]
fn setup(mut commands: Commands) {
    println!("=== HEART PARTICLE RENDERER ===");

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0.4, 0.6)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("Space: pause   E: envelope   G: gift   M: message"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
