//! Timed overlay state machine: `Closed → Opening → Open → Closing → Closed`.
//!
//! Each overlay owns a fixed cue script per transition. Ticks advance the phase
//! clock and emit cues whose offsets have passed; the host applies the cues to
//! whatever presentation layer it has (CSS classes on the page, for instance).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    /// Letter in an envelope: lid opens, paper slides out, then unfolds.
    Envelope,
    /// Video gift; closing rewinds the video.
    Gift,
    /// Short confirmation message that fades in and out.
    Message,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [Self::Envelope, Self::Gift, Self::Message];

    pub fn from_string(name: &str) -> Option<Self> {
        match name {
            "envelope" | "letter" => Some(Self::Envelope),
            "gift" | "video" => Some(Self::Gift),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Envelope => "envelope",
            Self::Gift => "gift",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayCue {
    Show,
    Hide,
    Reveal,
    Conceal,
    LidOpen,
    LidClose,
    PaperVisible,
    PaperExpanded,
    PaperFold,
    HideGuide,
    ResetMedia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueStep {
    pub at_ms: u32,
    pub cue: OverlayCue,
}

const fn step(at_ms: u32, cue: OverlayCue) -> CueStep {
    CueStep { at_ms, cue }
}

const ENVELOPE_OPENING: &[CueStep] = &[
    step(0, OverlayCue::Show),
    step(100, OverlayCue::LidOpen),
    step(600, OverlayCue::PaperVisible),
    step(1200, OverlayCue::PaperExpanded),
];
const ENVELOPE_CLOSING: &[CueStep] = &[
    step(0, OverlayCue::PaperFold),
    step(0, OverlayCue::LidClose),
    step(500, OverlayCue::Hide),
];

const GIFT_OPENING: &[CueStep] = &[step(0, OverlayCue::Show), step(0, OverlayCue::HideGuide)];
const GIFT_CLOSING: &[CueStep] = &[step(0, OverlayCue::Hide), step(0, OverlayCue::ResetMedia)];

// Reveal lands one frame after Show so the fade-in transition runs.
const MESSAGE_OPENING: &[CueStep] = &[step(0, OverlayCue::Show), step(16, OverlayCue::Reveal)];
const MESSAGE_CLOSING: &[CueStep] = &[step(0, OverlayCue::Conceal), step(500, OverlayCue::Hide)];

#[derive(Debug, Clone)]
pub struct Overlay {
    kind: OverlayKind,
    phase: OverlayPhase,
    phase_elapsed_ms: f32,
    next_step: usize,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            phase: OverlayPhase::Closed,
            phase_elapsed_ms: 0.0,
            next_step: 0,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn opening_script(&self) -> &'static [CueStep] {
        match self.kind {
            OverlayKind::Envelope => ENVELOPE_OPENING,
            OverlayKind::Gift => GIFT_OPENING,
            OverlayKind::Message => MESSAGE_OPENING,
        }
    }

    pub fn closing_script(&self) -> &'static [CueStep] {
        match self.kind {
            OverlayKind::Envelope => ENVELOPE_CLOSING,
            OverlayKind::Gift => GIFT_CLOSING,
            OverlayKind::Message => MESSAGE_CLOSING,
        }
    }

    /// Start opening. Ignored unless closed.
    pub fn open(&mut self) -> Vec<OverlayCue> {
        if self.phase != OverlayPhase::Closed {
            return Vec::new();
        }
        self.enter(OverlayPhase::Opening)
    }

    /// Start closing from `Opening` or `Open`. Pending opening cues are dropped.
    pub fn close(&mut self) -> Vec<OverlayCue> {
        if !matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open) {
            return Vec::new();
        }
        self.enter(OverlayPhase::Closing)
    }

    /// Open when closed, close when open or opening.
    pub fn toggle(&mut self) -> Vec<OverlayCue> {
        match self.phase {
            OverlayPhase::Closed => self.open(),
            OverlayPhase::Opening | OverlayPhase::Open => self.close(),
            OverlayPhase::Closing => Vec::new(),
        }
    }

    pub fn tick(&mut self, delta_ms: f32) -> Vec<OverlayCue> {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        self.advance(delta_ms)
    }

    fn enter(&mut self, phase: OverlayPhase) -> Vec<OverlayCue> {
        self.phase = phase;
        self.phase_elapsed_ms = 0.0;
        self.next_step = 0;
        self.advance(0.0)
    }

    fn advance(&mut self, delta_ms: f32) -> Vec<OverlayCue> {
        let (script, settled) = match self.phase {
            OverlayPhase::Opening => (self.opening_script(), OverlayPhase::Open),
            OverlayPhase::Closing => (self.closing_script(), OverlayPhase::Closed),
            OverlayPhase::Closed | OverlayPhase::Open => return Vec::new(),
        };

        self.phase_elapsed_ms += delta_ms;
        let mut cues = Vec::new();
        while let Some(step) = script.get(self.next_step) {
            if step.at_ms as f32 > self.phase_elapsed_ms {
                break;
            }
            cues.push(step.cue);
            self.next_step += 1;
        }

        if self.next_step == script.len() {
            self.phase = settled;
        }
        cues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_opens_in_stages() {
        let mut envelope = Overlay::new(OverlayKind::Envelope);
        assert_eq!(envelope.open(), vec![OverlayCue::Show]);
        assert_eq!(envelope.phase(), OverlayPhase::Opening);

        assert!(envelope.tick(99.0).is_empty());
        assert_eq!(envelope.tick(1.0), vec![OverlayCue::LidOpen]);
        assert_eq!(envelope.tick(500.0), vec![OverlayCue::PaperVisible]);
        assert_eq!(envelope.phase(), OverlayPhase::Opening);
        assert_eq!(envelope.tick(600.0), vec![OverlayCue::PaperExpanded]);
        assert_eq!(envelope.phase(), OverlayPhase::Open);
        assert!(envelope.tick(1000.0).is_empty());
    }

    #[test]
    fn large_tick_emits_cues_in_order() {
        let mut envelope = Overlay::new(OverlayKind::Envelope);
        envelope.open();
        assert_eq!(
            envelope.tick(5000.0),
            vec![
                OverlayCue::LidOpen,
                OverlayCue::PaperVisible,
                OverlayCue::PaperExpanded
            ]
        );
    }

    #[test]
    fn envelope_closes_after_fade() {
        let mut envelope = Overlay::new(OverlayKind::Envelope);
        envelope.open();
        envelope.tick(2000.0);

        assert_eq!(
            envelope.close(),
            vec![OverlayCue::PaperFold, OverlayCue::LidClose]
        );
        assert_eq!(envelope.phase(), OverlayPhase::Closing);
        assert!(envelope.tick(499.0).is_empty());
        assert_eq!(envelope.tick(1.0), vec![OverlayCue::Hide]);
        assert_eq!(envelope.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn closing_mid_opening_drops_pending_cues() {
        let mut envelope = Overlay::new(OverlayKind::Envelope);
        envelope.open();
        envelope.tick(150.0);
        envelope.close();
        let cues = envelope.tick(1000.0);
        assert_eq!(cues, vec![OverlayCue::Hide]);
        assert!(!cues.contains(&OverlayCue::PaperExpanded));
    }

    #[test]
    fn gift_is_instant_both_ways() {
        let mut gift = Overlay::new(OverlayKind::Gift);
        assert_eq!(gift.open(), vec![OverlayCue::Show, OverlayCue::HideGuide]);
        assert_eq!(gift.phase(), OverlayPhase::Open);
        assert_eq!(gift.close(), vec![OverlayCue::Hide, OverlayCue::ResetMedia]);
        assert_eq!(gift.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn out_of_phase_requests_are_ignored() {
        let mut message = Overlay::new(OverlayKind::Message);
        assert!(message.close().is_empty());
        message.open();
        assert!(message.open().is_empty());
        message.tick(16.0);
        assert_eq!(message.phase(), OverlayPhase::Open);

        message.toggle();
        assert_eq!(message.phase(), OverlayPhase::Closing);
        assert!(message.toggle().is_empty());
        assert!(message.open().is_empty());
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in OverlayKind::ALL {
            assert_eq!(OverlayKind::from_string(kind.as_str()), Some(kind));
        }
        assert_eq!(OverlayKind::from_string("letter"), Some(OverlayKind::Envelope));
        assert_eq!(OverlayKind::from_string("curtain"), None);
    }
}
