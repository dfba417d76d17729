use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use heart_cloud::OverlayKind;
use serde::{Deserialize, Serialize};

use crate::engine::systems::fps_tracking::current_fps;
use crate::engine::systems::frame_loop::HeartFrameLoop;
use crate::engine::systems::overlays::{Overlays, notify_cues};
use crate::engine::systems::viewport::ViewportState;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Notifications queued since the last flush.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    /// Queue response for transmission to the page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut overlays: ResMut<Overlays>,
    mut frame_loop: ResMut<HeartFrameLoop>,
    viewport: Res<ViewportState>,
) {
    for event in events.read() {
        rpc_interface.send_notification(
            "debug_message",
            serde_json::json!({
                "message": format!("Received RPC: {}", event.content)
            }),
        );

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let mut context = RpcContext {
                    fps: current_fps(&diagnostics),
                    overlays: &mut overlays,
                    frame_loop: &mut frame_loop,
                    viewport: &viewport,
                    rpc_interface: &mut rpc_interface,
                };
                if let Some(response) = handle_rpc_request(&request, &mut context) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Engine state an RPC method may read or change.
pub struct RpcContext<'a> {
    pub fps: f32,
    pub overlays: &'a mut Overlays,
    pub frame_loop: &'a mut HeartFrameLoop,
    pub viewport: &'a ViewportState,
    pub rpc_interface: &'a mut WebRpcInterface,
}

/// Handle individual RPC request and generate response based on method.
///
/// Requests without an ID are notifications: they still run but get no response.
pub fn handle_rpc_request(request: &RpcRequest, context: &mut RpcContext) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "open_overlay" => handle_overlay(&request.params, context, true),
        "close_overlay" => handle_overlay(&request.params, context, false),
        "pause_animation" => handle_animation(context, false),
        "resume_animation" => handle_animation(context, true),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        "get_viewport" => serde_json::to_value(context.viewport)
            .map_err(|e| RpcError::internal_error(&e.to_string())),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return request.id.clone().map(|id| {
                create_error_response(
                    id,
                    -32601,
                    "Method not found",
                    Some(serde_json::json!({"method": request.method})),
                )
            });
        }
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Open or close an overlay by name and forward the cues it emits immediately.
fn handle_overlay(
    params: &serde_json::Value,
    context: &mut RpcContext,
    open: bool,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct OverlayParams {
        overlay: String,
    }

    let overlay_params = serde_json::from_value::<OverlayParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'overlay' parameter"))?;

    let kind = OverlayKind::from_string(&overlay_params.overlay).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown overlay: {}", overlay_params.overlay))
    })?;

    let cues = if open {
        context.overlays.open(kind)
    } else {
        context.overlays.close(kind)
    };
    notify_cues(context.rpc_interface, kind, &cues);

    info!(
        "Overlay {} {} via RPC",
        kind.as_str(),
        if open { "opening" } else { "closing" }
    );

    Ok(serde_json::json!({
        "overlay": kind,
        "phase": context.overlays.phase(kind),
        "accepted": !cues.is_empty(),
    }))
}

fn handle_animation(context: &mut RpcContext, run: bool) -> Result<serde_json::Value, RpcError> {
    if run {
        context.frame_loop.start();
    } else {
        context.frame_loop.pause();
    }

    Ok(serde_json::json!({
        "running": context.frame_loop.is_running(),
        "elapsed_secs": context.frame_loop.elapsed_secs(),
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_cloud::OverlayPhase;

    struct Engine {
        overlays: Overlays,
        frame_loop: HeartFrameLoop,
        viewport: ViewportState,
        rpc_interface: WebRpcInterface,
    }

    impl Engine {
        fn new() -> Self {
            let mut frame_loop = HeartFrameLoop::default();
            frame_loop.start();
            Self {
                overlays: Overlays::default(),
                frame_loop,
                viewport: ViewportState::default(),
                rpc_interface: WebRpcInterface::default(),
            }
        }

        fn call(&mut self, json: &str) -> Option<RpcResponse> {
            let request: RpcRequest = serde_json::from_str(json).unwrap();
            let mut context = RpcContext {
                fps: 59.5,
                overlays: &mut self.overlays,
                frame_loop: &mut self.frame_loop,
                viewport: &self.viewport,
                rpc_interface: &mut self.rpc_interface,
            };
            handle_rpc_request(&request, &mut context)
        }
    }

    #[test]
    fn open_overlay_emits_first_cue() {
        let mut engine = Engine::new();
        let response = engine
            .call(r#"{"jsonrpc":"2.0","method":"open_overlay","params":{"overlay":"letter"},"id":1}"#)
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["overlay"], "envelope");
        assert_eq!(result["phase"], "opening");
        assert_eq!(engine.overlays.phase(OverlayKind::Envelope), OverlayPhase::Opening);

        let cues = engine.rpc_interface.pending_notifications();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].params["cue"], "show");
    }

    #[test]
    fn unknown_overlay_is_invalid_params() {
        let mut engine = Engine::new();
        let response = engine
            .call(r#"{"jsonrpc":"2.0","method":"open_overlay","params":{"overlay":"curtain"},"id":2}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32602);

        let response = engine
            .call(r#"{"jsonrpc":"2.0","method":"close_overlay","params":{},"id":3}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[test]
    fn unknown_method_is_not_found() {
        let mut engine = Engine::new();
        let response = engine
            .call(r#"{"jsonrpc":"2.0","method":"explode","params":null,"id":"x"}"#)
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(response.id, Some(serde_json::json!("x")));
    }

    #[test]
    fn pause_and_resume_control_the_frame_loop() {
        let mut engine = Engine::new();
        engine.frame_loop.advance(1.0);

        let paused = engine
            .call(r#"{"jsonrpc":"2.0","method":"pause_animation","id":4}"#)
            .unwrap();
        assert_eq!(paused.result.unwrap()["running"], false);
        assert!(engine.frame_loop.advance(1.0).is_none());

        let resumed = engine
            .call(r#"{"jsonrpc":"2.0","method":"resume_animation","id":5}"#)
            .unwrap();
        assert_eq!(resumed.result.unwrap()["elapsed_secs"], 1.0);
    }

    #[test]
    fn notifications_run_without_response() {
        let mut engine = Engine::new();
        let response =
            engine.call(r#"{"jsonrpc":"2.0","method":"open_overlay","params":{"overlay":"gift"}}"#);
        assert!(response.is_none());
        assert_eq!(engine.overlays.phase(OverlayKind::Gift), OverlayPhase::Open);
    }

    #[test]
    fn diagnostics_report_fps_and_viewport() {
        let mut engine = Engine::new();
        let fps = engine
            .call(r#"{"jsonrpc":"2.0","method":"get_fps","id":6}"#)
            .unwrap();
        assert_eq!(fps.result.unwrap()["fps"], 59.5);

        let viewport = engine
            .call(r#"{"jsonrpc":"2.0","method":"get_viewport","id":7}"#)
            .unwrap()
            .result
            .unwrap();
        assert_eq!(viewport["width"], 1280.0);
        assert_eq!(viewport["pixel_ratio"], 1.0);
    }
}
