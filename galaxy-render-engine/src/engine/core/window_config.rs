use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResized};

use constants::render_settings::MAX_PIXEL_DENSITY;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Keep the render surface in sync with viewport changes.
///
/// The projection aspect is recomputed from the new size by the camera
/// systems; this clamps the pixel-density scale so high-DPI displays do not
/// quadruple fragment cost.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut windows: Query<&mut Window>,
) {
    for event in resize_events.read() {
        let Ok(mut window) = windows.get_mut(event.window) else {
            continue;
        };
        if window.resolution.scale_factor() > MAX_PIXEL_DENSITY {
            window
                .resolution
                .set_scale_factor_override(Some(MAX_PIXEL_DENSITY));
        }
        info!("Viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}
