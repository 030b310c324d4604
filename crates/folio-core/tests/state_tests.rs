use folio_core::{DeviceClass, OverlayFlags, PresentationState, ScrollState};

fn rank(state: PresentationState) -> u8 {
    match state {
        PresentationState::Intro => 0,
        PresentationState::Profile => 1,
        PresentationState::Skills => 2,
        PresentationState::Projects => 3,
        PresentationState::Guestbook => 4,
    }
}

#[test]
fn classify_covers_every_offset() {
    // Any (y, h > 0) pair maps to exactly one of the five states.
    for h in [480.0_f32, 800.0, 1200.0] {
        let mut y = 0.0_f32;
        while y < h * 8.0 {
            let state = PresentationState::classify(y, h);
            assert!(rank(state) <= 4);
            y += 13.0;
        }
    }
}

#[test]
fn classify_is_monotonic_in_offset() {
    let h = 800.0;
    let mut prev = 0;
    let mut y = 0.0_f32;
    while y < h * 8.0 {
        let r = rank(PresentationState::classify(y, h));
        assert!(
            r >= prev,
            "state rank decreased at y={} ({} -> {})",
            y,
            prev,
            r
        );
        prev = r;
        y += 7.0;
    }
}

#[test]
fn classify_threshold_walkthrough() {
    let h = 800.0;
    assert_eq!(PresentationState::classify(0.0, h), PresentationState::Intro);
    // 0.5h = 400
    assert_eq!(
        PresentationState::classify(900.0, h),
        PresentationState::Profile
    );
    // 1.5h = 1200
    assert_eq!(
        PresentationState::classify(1300.0, h),
        PresentationState::Skills
    );
    // still below 3.5h = 2800
    assert_eq!(
        PresentationState::classify(2700.0, h),
        PresentationState::Skills
    );
    assert_eq!(
        PresentationState::classify(3200.0, h),
        PresentationState::Projects
    );
    // 6.5h = 5200
    assert_eq!(
        PresentationState::classify(5300.0, h),
        PresentationState::Guestbook
    );
}

#[test]
fn classify_scrolling_back_up_returns_to_earlier_states() {
    let h = 800.0;
    assert_eq!(
        PresentationState::classify(5300.0, h),
        PresentationState::Guestbook
    );
    assert_eq!(
        PresentationState::classify(600.0, h),
        PresentationState::Profile
    );
    assert_eq!(PresentationState::classify(0.0, h), PresentationState::Intro);
}

#[test]
fn free_floating_states_are_the_pre_grid_phases() {
    assert!(PresentationState::Intro.is_free_floating());
    assert!(PresentationState::Profile.is_free_floating());
    assert!(!PresentationState::Skills.is_free_floating());
    assert!(!PresentationState::Projects.is_free_floating());
    assert!(!PresentationState::Guestbook.is_free_floating());
}

#[test]
fn overlay_at_top_shows_only_intro() {
    let flags = OverlayFlags::derive(0.0, 800.0);
    assert!(flags.intro);
    assert!(!flags.profile);
    assert!(!flags.skills);
    assert!(!flags.projects);
    assert!(!flags.guestbook);
}

#[test]
fn overlay_skills_window_overlaps_the_skills_phase() {
    // y inside both the skills overlay window (1.8h..3.5h) and the skills
    // 3D phase (1.5h..3.5h).
    let h = 800.0;
    let y = 2500.0;
    let flags = OverlayFlags::derive(y, h);
    assert!(flags.skills);
    assert!(!flags.profile);
    assert_eq!(PresentationState::classify(y, h), PresentationState::Skills);
}

#[test]
fn overlay_crossfade_gap_between_profile_and_skills() {
    // Between 1.5h and 1.8h the 3D scene is already in skills but no text
    // section is visible yet; that silence is the crossfade window.
    let h = 800.0;
    let y = 1.65 * h;
    let flags = OverlayFlags::derive(y, h);
    assert!(!flags.profile);
    assert!(!flags.skills);
    assert_eq!(PresentationState::classify(y, h), PresentationState::Skills);
}

#[test]
fn overlay_at_most_one_section_plus_handoff() {
    // The windows never stack more than two sections at once.
    let h = 800.0;
    let mut y = 0.0_f32;
    while y < h * 8.0 {
        let flags = OverlayFlags::derive(y, h);
        let visible = [
            flags.intro,
            flags.profile,
            flags.skills,
            flags.projects,
            flags.guestbook,
        ]
        .iter()
        .filter(|v| **v)
        .count();
        assert!(visible <= 2, "{} sections visible at y={}", visible, y);
        y += 11.0;
    }
}

#[test]
fn device_class_splits_on_world_viewport_width() {
    assert_eq!(DeviceClass::classify(5.0), DeviceClass::Narrow);
    assert_eq!(DeviceClass::classify(9.5), DeviceClass::Wide);
    assert_eq!(DeviceClass::Narrow.scale_factor(), 0.65);
    assert_eq!(DeviceClass::Wide.scale_factor(), 1.0);
}

#[test]
fn scroll_state_clamps_and_derives() {
    let mut scroll = ScrollState::default();
    scroll.update(-10.0, 800.0);
    assert_eq!(scroll.offset_px, 0.0);
    assert_eq!(scroll.state(), PresentationState::Intro);

    scroll.update(2500.0, 800.0);
    assert_eq!(scroll.state(), PresentationState::Skills);
    assert!(scroll.overlay().skills);
}
