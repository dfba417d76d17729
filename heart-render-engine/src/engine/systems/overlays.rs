use bevy::prelude::*;
use heart_cloud::{Overlay, OverlayCue, OverlayKind, OverlayPhase};

use crate::rpc::web_rpc::WebRpcInterface;

/// One state machine per overlay kind, all starting closed.
#[derive(Resource, Debug)]
pub struct Overlays {
    overlays: Vec<Overlay>,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            overlays: OverlayKind::ALL.into_iter().map(Overlay::new).collect(),
        }
    }
}

impl Overlays {
    fn get_mut(&mut self, kind: OverlayKind) -> Option<&mut Overlay> {
        self.overlays.iter_mut().find(|overlay| overlay.kind() == kind)
    }

    pub fn phase(&self, kind: OverlayKind) -> OverlayPhase {
        self.overlays
            .iter()
            .find(|overlay| overlay.kind() == kind)
            .map(Overlay::phase)
            .unwrap_or_default()
    }

    pub fn open(&mut self, kind: OverlayKind) -> Vec<OverlayCue> {
        self.get_mut(kind).map(Overlay::open).unwrap_or_default()
    }

    pub fn close(&mut self, kind: OverlayKind) -> Vec<OverlayCue> {
        self.get_mut(kind).map(Overlay::close).unwrap_or_default()
    }

    pub fn toggle(&mut self, kind: OverlayKind) -> Vec<OverlayCue> {
        self.get_mut(kind).map(Overlay::toggle).unwrap_or_default()
    }

    /// Advance every overlay, returning the cues each one emitted.
    pub fn tick(&mut self, delta_ms: f32) -> Vec<(OverlayKind, Vec<OverlayCue>)> {
        self.overlays
            .iter_mut()
            .map(|overlay| (overlay.kind(), overlay.tick(delta_ms)))
            .filter(|(_, cues)| !cues.is_empty())
            .collect()
    }
}

/// Forward cues to the host page, which maps them onto its DOM.
pub fn notify_cues(rpc_interface: &mut WebRpcInterface, kind: OverlayKind, cues: &[OverlayCue]) {
    for cue in cues {
        debug!("Overlay {} cue {:?}", kind.as_str(), cue);
        rpc_interface.send_notification(
            "overlay_cue",
            serde_json::json!({
                "overlay": kind,
                "cue": cue,
            }),
        );
    }
}

/// Overlay timers run on wall time, independent of the animation pause state.
pub fn tick_overlays(
    time: Res<Time>,
    mut overlays: ResMut<Overlays>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let delta_ms = time.delta_secs() * 1000.0;
    for (kind, cues) in overlays.tick(delta_ms) {
        notify_cues(&mut rpc_interface, kind, &cues);
    }
}

/// E, G and M toggle the envelope, gift and message overlays.
pub fn handle_overlay_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlays: ResMut<Overlays>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let shortcuts = [
        (KeyCode::KeyE, OverlayKind::Envelope),
        (KeyCode::KeyG, OverlayKind::Gift),
        (KeyCode::KeyM, OverlayKind::Message),
    ];

    for (key, kind) in shortcuts {
        if keyboard.just_pressed(key) {
            let cues = overlays.toggle(kind);
            info!("Overlay {} → {:?}", kind.as_str(), overlays.phase(kind));
            notify_cues(&mut rpc_interface, kind, &cues);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_are_independent() {
        let mut overlays = Overlays::default();
        assert_eq!(overlays.open(OverlayKind::Envelope), vec![OverlayCue::Show]);
        assert_eq!(overlays.phase(OverlayKind::Envelope), OverlayPhase::Opening);
        assert_eq!(overlays.phase(OverlayKind::Gift), OverlayPhase::Closed);
    }

    #[test]
    fn tick_reports_only_overlays_with_cues() {
        let mut overlays = Overlays::default();
        overlays.open(OverlayKind::Envelope);
        overlays.open(OverlayKind::Gift);

        let emitted = overlays.tick(100.0);
        assert_eq!(
            emitted,
            vec![(OverlayKind::Envelope, vec![OverlayCue::LidOpen])]
        );
    }

    #[test]
    fn cues_become_notifications() {
        let mut rpc_interface = WebRpcInterface::default();
        notify_cues(
            &mut rpc_interface,
            OverlayKind::Message,
            &[OverlayCue::Show, OverlayCue::Reveal],
        );
        let sent = rpc_interface.pending_notifications();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].method, "overlay_cue");
        assert_eq!(sent[1].params["overlay"], "message");
        assert_eq!(sent[1].params["cue"], "reveal");
    }
}
