use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use heart_cloud::viewport::{aspect_ratio, pixel_ratio};
use serde::Serialize;

use crate::engine::camera::heart_camera::HeartCamera;

/// Last known size of the render surface in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub aspect_ratio: f32,
    /// Device pixel ratio clamped to the supported maximum.
    pub pixel_ratio: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            aspect_ratio: 1280.0 / 720.0,
            pixel_ratio: 1.0,
        }
    }
}

impl ViewportState {
    /// Record a new surface size. A collapsed surface (a minimised window, a
    /// hidden iframe) is rejected and the previous size is kept.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
    ) -> heart_cloud::Result<()> {
        let aspect_ratio = aspect_ratio(width, height)?;
        self.width = width;
        self.height = height;
        self.aspect_ratio = aspect_ratio;
        self.pixel_ratio = pixel_ratio(device_pixel_ratio);
        Ok(())
    }

    pub fn sync_with_window(&mut self, window: &Window) -> heart_cloud::Result<()> {
        self.resize(window.width(), window.height(), window.scale_factor())
    }
}

pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportState>,
    mut cameras: Query<&mut Projection, With<HeartCamera>>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };

    let device_pixel_ratio = windows
        .get(event.window)
        .map(|window| window.scale_factor())
        .unwrap_or(viewport.pixel_ratio);

    if let Err(error) = viewport.resize(event.width, event.height, device_pixel_ratio) {
        debug!("Ignoring resize: {}", error);
        return;
    }

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect_ratio;
        }
    }
}
