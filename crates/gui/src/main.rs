mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::input`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use wallplast_editor_lib::input;
pub use wallplast_editor_lib::state;

use std::path::PathBuf;

use app::MapEditorApp;
use state::{EditorSettings, EditorState};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallplast_editor=info".into()),
        )
        .init();

    let map_path = parse_map_arg();
    let settings = EditorSettings::load();

    let state = match EditorState::open(&map_path, settings) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open map {}: {e}", map_path.display());
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Wallplast")
                .set_description(e)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            return;
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wallplast Map Editor")
            .with_inner_size([1300.0, 760.0])
            .with_min_inner_size([900.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "wallplast-editor",
        native_options,
        Box::new(move |cc| Ok(Box::new(MapEditorApp::new(cc, state)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// `--map <path>`, defaulting to `map.wpm` in the working directory.
fn parse_map_arg() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--map" && i + 1 < args.len() {
            return PathBuf::from(&args[i + 1]);
        }
        i += 1;
    }
    PathBuf::from(state::scene::DEFAULT_MAP_FILE)
}
