//! Scroll-derived presentation state.
//!
//! Everything here is a pure function of the scroll offset and viewport
//! height. Two classifiers read the same offset: [`PresentationState`] drives
//! the 3D scene and [`OverlayFlags`] drives the HTML sections. Their
//! thresholds are intentionally out of phase (see `constants`) so the text
//! and the scene crossfade instead of switching on the same pixel.

use crate::constants::*;

/// Discrete phase of the scroll-driven scene. Exactly one is active for any
/// scroll position; the mapping is monotonic in the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationState {
    Intro,
    Profile,
    Skills,
    Projects,
    Guestbook,
}

impl PresentationState {
    /// Classify a scroll offset against the phase thresholds, lowest to
    /// highest; the last threshold exceeded wins.
    pub fn classify(offset_px: f32, viewport_px: f32) -> Self {
        let h = viewport_px.max(1.0);
        let mut state = Self::Intro;
        if offset_px > h * PHASE_THRESHOLDS[0] {
            state = Self::Profile;
        }
        if offset_px > h * PHASE_THRESHOLDS[1] {
            state = Self::Skills;
        }
        if offset_px > h * PHASE_THRESHOLDS[2] {
            state = Self::Projects;
        }
        if offset_px > h * PHASE_THRESHOLDS[3] {
            state = Self::Guestbook;
        }
        state
    }

    /// Phases in which objects drift under simulated physics instead of
    /// being pinned to a layout slot.
    #[inline]
    pub fn is_free_floating(self) -> bool {
        matches!(self, Self::Intro | Self::Profile)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Profile => "profile",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Guestbook => "guestbook",
        }
    }
}

/// Visibility of the five HTML sections. Independent booleans; around a 3D
/// transition a section may already be hidden while the next is not yet
/// shown (or both briefly visible), which is the intended crossfade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayFlags {
    pub intro: bool,
    pub profile: bool,
    pub skills: bool,
    pub projects: bool,
    pub guestbook: bool,
}

impl OverlayFlags {
    pub fn derive(offset_px: f32, viewport_px: f32) -> Self {
        let h = viewport_px.max(1.0);
        let y = offset_px;
        Self {
            intro: y < h * OVERLAY_INTRO_END,
            profile: y > h * OVERLAY_PROFILE.0 && y < h * OVERLAY_PROFILE.1,
            skills: y > h * OVERLAY_SKILLS.0 && y < h * OVERLAY_SKILLS.1,
            projects: y > h * OVERLAY_PROJECTS.0 && y < h * OVERLAY_PROJECTS.1,
            guestbook: y > h * OVERLAY_GUESTBOOK_START,
        }
    }
}

/// Coarse viewport category, decided once per layout pass from the
/// world-space viewport width and threaded through as a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Narrow,
    Wide,
}

impl DeviceClass {
    #[inline]
    pub fn classify(world_viewport_width: f32) -> Self {
        if world_viewport_width < NARROW_VIEWPORT_WORLD {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    #[inline]
    pub fn scale_factor(self) -> f32 {
        match self {
            Self::Narrow => NARROW_SCALE_FACTOR,
            Self::Wide => 1.0,
        }
    }
}

/// Single source of truth for the scroll position. Only the platform scroll
/// handler writes it; every derived value recomputes from a snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub offset_px: f32,
    pub viewport_px: f32,
}

impl ScrollState {
    pub fn update(&mut self, offset_px: f32, viewport_px: f32) {
        self.offset_px = offset_px.max(0.0);
        self.viewport_px = viewport_px.max(1.0);
    }

    #[inline]
    pub fn state(&self) -> PresentationState {
        PresentationState::classify(self.offset_px, self.viewport_px)
    }

    #[inline]
    pub fn overlay(&self) -> OverlayFlags {
        OverlayFlags::derive(self.offset_px, self.viewport_px)
    }
}
