//! JSON command protocol for driving the editor from scripts and agents.

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use shared::{Axis, Block, MapFile};

use crate::harness::TestHarness;
use crate::input::ArrowKey;
use crate::viewport::gizmo::{GizmoMode, Handle};
use crate::viewport::view::View;

fn one_step() -> u32 {
    1
}

/// A command the agent can execute. Points are view-local pixels `[x, y]`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Append a block to the map
    AddBlock { block: Block },
    /// Switch the gizmo tool
    SetMode { mode: GizmoMode },
    /// Primary click (press and release) in a view
    Click { view: View, at: [f32; 2] },
    /// Hover the pointer
    MovePointer { view: View, at: [f32; 2] },
    /// Primary drag from one point to another
    Drag {
        view: View,
        from: [f32; 2],
        to: [f32; 2],
        #[serde(default = "one_step")]
        steps: u32,
    },
    /// Drag a gizmo handle ("x", "y", "z" or "ring") by a pixel offset
    DragHandle {
        view: View,
        handle: String,
        by: [f32; 2],
        #[serde(default = "one_step")]
        steps: u32,
    },
    /// Secondary-button pan
    Pan { view: View, from: [f32; 2], to: [f32; 2] },
    /// Wheel ticks, positive zooms in
    Scroll { view: View, ticks: i32 },
    /// Arrow key nudge
    Key { key: ArrowKey },
    ClearSelection,
    /// Summary of blocks, selection, tool and cameras
    Inspect,
    /// Full JSON of one block
    InspectBlock { index: usize },
    /// Export the map as JSON
    ExportMap,
    /// Replace the map
    LoadMap { map: MapFile },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn pos([x, y]: [f32; 2]) -> Pos2 {
    Pos2::new(x, y)
}

fn parse_handle(name: &str) -> Result<Handle, String> {
    match name {
        "x" => Ok(Handle::Axis(Axis::X)),
        "y" => Ok(Handle::Axis(Axis::Y)),
        "z" => Ok(Handle::Axis(Axis::Z)),
        "ring" => Ok(Handle::Ring),
        other => Err(format!("Unknown handle: {other}")),
    }
}

fn selection_json(harness: &TestHarness) -> serde_json::Value {
    match harness.selected() {
        Some((index, view)) => serde_json::json!({ "index": index, "view": view }),
        None => serde_json::Value::Null,
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::AddBlock { block } => {
            let index = harness.add_block(block);
            CommandResponse::ok_with_data(serde_json::json!({ "index": index }))
        }

        AgentCommand::SetMode { mode } => {
            harness.set_mode(mode);
            CommandResponse::ok_with_data(serde_json::json!({ "mode": mode }))
        }

        AgentCommand::Click { view, at } => {
            harness.click(view, pos(at));
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selection_json(harness) }))
        }

        AgentCommand::MovePointer { view, at } => {
            let redraw = harness.move_pointer(view, pos(at));
            CommandResponse::ok_with_data(serde_json::json!({
                "redraw": redraw,
                "hovered": harness.state.highlighted_handle().map(|h| format!("{h:?}")),
            }))
        }

        AgentCommand::Drag { view, from, to, steps } => {
            harness.drag(view, pos(from), pos(to), steps);
            CommandResponse::ok()
        }

        AgentCommand::DragHandle { view, handle, by, steps } => {
            let handle = match parse_handle(&handle) {
                Ok(h) => h,
                Err(e) => return CommandResponse::err(e),
            };
            if harness.drag_handle(view, handle, Vec2::new(by[0], by[1]), steps) {
                CommandResponse::ok()
            } else {
                CommandResponse::err(format!("No {handle:?} handle shown in {} view", view.name()))
            }
        }

        AgentCommand::Pan { view, from, to } => {
            harness.pan(view, pos(from), pos(to));
            let center = harness.camera(view).center;
            CommandResponse::ok_with_data(serde_json::json!({ "center": [center.x, center.y] }))
        }

        AgentCommand::Scroll { view, ticks } => {
            harness.scroll(view, ticks);
            CommandResponse::ok_with_data(serde_json::json!({ "scale": harness.camera(view).scale }))
        }

        AgentCommand::Key { key } => {
            let moved = harness.key(key);
            CommandResponse::ok_with_data(serde_json::json!({ "changed": moved }))
        }

        AgentCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => {
            let blocks: Vec<serde_json::Value> = harness
                .state
                .scene
                .blocks()
                .iter()
                .enumerate()
                .map(|(index, block)| {
                    serde_json::json!({
                        "index": index,
                        "name": block.name(),
                        "material": block.material(),
                        "position": Axis::ALL.map(|a| block.position(a)),
                        "size": Axis::ALL.map(|a| block.size(a)),
                        "rotation": Axis::ALL.map(|a| block.rotation(a)),
                    })
                })
                .collect();
            let cameras: Vec<serde_json::Value> = View::ALL
                .iter()
                .map(|&view| {
                    let cam = harness.camera(view);
                    serde_json::json!({
                        "view": view,
                        "scale": cam.scale,
                        "center": [cam.center.x, cam.center.y],
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "block_count": blocks.len(),
                "mode": harness.state.mode,
                "selected": selection_json(harness),
                "cameras": cameras,
                "blocks": blocks,
            }))
        }

        AgentCommand::InspectBlock { index } => match harness.state.scene.block(index) {
            Some(block) => match serde_json::to_value(block) {
                Ok(value) => CommandResponse::ok_with_data(value),
                Err(e) => CommandResponse::err(format!("Serialize error: {e}")),
            },
            None => CommandResponse::err(format!("Block index out of range: {index}")),
        },

        AgentCommand::ExportMap => {
            let json = harness.export_map_json();
            CommandResponse::ok_with_data(serde_json::json!({ "map_json": json }))
        }

        AgentCommand::LoadMap { map } => {
            harness.state.load_map(map);
            CommandResponse::ok_with_data(serde_json::json!({ "block_count": harness.block_count() }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
