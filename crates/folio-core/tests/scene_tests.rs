use folio_core::{
    object_target, scene_pose, world_viewport, DeviceClass, FloatBounds, HighlightCycler,
    PresentationState, SceneComposer, Transform, SKILLS,
};
use glam::Vec3;

fn wide_bounds() -> FloatBounds {
    let (w, h) = world_viewport(16.0 / 9.0);
    FloatBounds::from_viewport(w, h)
}

#[test]
fn grid_slots_fill_five_columns() {
    let t0 = object_target(PresentationState::Skills, DeviceClass::Wide, 0);
    assert!((t0.offset - Vec3::new(-1.8, 0.0, -0.9)).length() < 1e-6);
    assert_eq!(t0.scale, 1.0);

    // index 7 -> column 2, row 1: dead center of the board
    let t7 = object_target(PresentationState::Skills, DeviceClass::Wide, 7);
    assert!(t7.offset.length() < 1e-6);

    let t14 = object_target(PresentationState::Skills, DeviceClass::Wide, 14);
    assert!((t14.offset - Vec3::new(1.8, 0.0, 0.9)).length() < 1e-6);
}

#[test]
fn narrow_grid_is_scaled_down() {
    let wide = object_target(PresentationState::Projects, DeviceClass::Wide, 0);
    let narrow = object_target(PresentationState::Projects, DeviceClass::Narrow, 0);
    assert!((narrow.offset - wide.offset * 0.65).length() < 1e-6);
    assert!((narrow.scale - 0.65).abs() < 1e-6);
}

#[test]
fn pre_grid_phases_park_objects_off_layout() {
    let intro = object_target(PresentationState::Intro, DeviceClass::Wide, 3);
    assert_eq!(intro.offset, Vec3::ZERO);
    assert_eq!(intro.scale, 0.5);

    let profile = object_target(PresentationState::Profile, DeviceClass::Wide, 3);
    assert_eq!(profile.offset, Vec3::new(-3.0, 1.0, -4.0));
    assert_eq!(profile.scale, 0.5);

    // Same for every index: the cluster is shared
    for i in 0..SKILLS.len() {
        assert_eq!(
            object_target(PresentationState::Profile, DeviceClass::Wide, i),
            profile
        );
    }
}

#[test]
fn layout_functions_are_pure() {
    for state in [
        PresentationState::Intro,
        PresentationState::Profile,
        PresentationState::Skills,
        PresentationState::Projects,
        PresentationState::Guestbook,
    ] {
        for device in [DeviceClass::Wide, DeviceClass::Narrow] {
            assert_eq!(scene_pose(state, device), scene_pose(state, device));
            for i in 0..SKILLS.len() {
                assert_eq!(
                    object_target(state, device, i),
                    object_target(state, device, i)
                );
            }
        }
    }
}

#[test]
fn scene_pose_flips_the_board_for_projects() {
    let pose = scene_pose(PresentationState::Projects, DeviceClass::Wide);
    assert!(pose.rotation.y > 2.0, "projects shows the far side of the board");
    assert!((pose.scale - 0.6).abs() < 1e-6);

    let narrow = scene_pose(PresentationState::Projects, DeviceClass::Narrow);
    assert_eq!(narrow.offset.x, 0.0, "narrow layouts stay centered");
}

#[test]
fn composer_is_deterministic_per_seed() {
    let a = SceneComposer::new(42);
    let b = SceneComposer::new(42);
    let c = SceneComposer::new(43);
    for i in 0..a.len() {
        assert_eq!(a.objects()[i].kinematics, b.objects()[i].kinematics);
    }
    let same = (0..a.len())
        .all(|i| a.objects()[i].kinematics.position == c.objects()[i].kinematics.position);
    assert!(!same, "different seeds should spawn different drift");
}

#[test]
fn highlight_is_a_singleton() {
    let mut composer = SceneComposer::new(1);
    composer.set_highlight(Some(3));
    assert_eq!(composer.highlight(), Some(3));
    composer.set_highlight(Some(7));
    assert_eq!(composer.highlight(), Some(7));
    composer.set_highlight(None);
    assert_eq!(composer.highlight(), None);

    // Out-of-range selections are dropped rather than kept stale
    composer.set_highlight(Some(99));
    assert_eq!(composer.highlight(), None);
}

#[test]
fn cycler_fires_at_the_expected_cadence() {
    let mut cycler = HighlightCycler::new(5);
    let mut fires = 0;
    let steps = (10.0 / 0.05) as usize;
    for _ in 0..steps {
        if let Some(pick) = cycler.tick(0.05, SKILLS.len()) {
            assert!(pick < SKILLS.len());
            fires += 1;
        }
    }
    // 10 seconds at a 1.5 second interval: six picks, repeats allowed
    assert!(fires >= 5, "only {} picks in 10 simulated seconds", fires);
}

#[test]
fn cycler_ignores_empty_sets() {
    let mut cycler = HighlightCycler::new(5);
    assert_eq!(cycler.tick(10.0, 0), None);
}

#[test]
fn auto_cycling_only_runs_narrow_in_skills() {
    let bounds = wide_bounds();
    let mut composer = SceneComposer::new(9);

    // Wide viewport: never cycles no matter how long the skills phase runs
    let mut changed = false;
    for _ in 0..600 {
        changed |= composer.update(
            1.0 / 60.0,
            PresentationState::Skills,
            DeviceClass::Wide,
            bounds,
            None,
        );
    }
    assert!(!changed);

    // Narrow viewport in skills: the cycler takes over
    let mut changed = false;
    for _ in 0..600 {
        changed |= composer.update(
            1.0 / 60.0,
            PresentationState::Skills,
            DeviceClass::Narrow,
            bounds,
            None,
        );
    }
    assert!(changed);
    assert!(composer.highlight().is_some());
}

#[test]
fn compose_emits_keycaps_and_reveals_chassis_when_pinned() {
    let bounds = wide_bounds();
    let mut composer = SceneComposer::new(11);
    assert_eq!(composer.compose().len(), SKILLS.len());

    for _ in 0..300 {
        composer.update(
            1.0 / 60.0,
            PresentationState::Skills,
            DeviceClass::Wide,
            bounds,
            None,
        );
    }
    // Keycaps plus the chassis plate
    assert_eq!(composer.compose().len(), SKILLS.len() + 1);
    assert_eq!(composer.pick_targets().len(), SKILLS.len());
}

#[test]
fn pose_settles_on_the_phase_target() {
    let bounds = wide_bounds();
    let mut composer = SceneComposer::new(2);
    for _ in 0..600 {
        composer.update(
            1.0 / 60.0,
            PresentationState::Skills,
            DeviceClass::Wide,
            bounds,
            None,
        );
    }
    let target = scene_pose(PresentationState::Skills, DeviceClass::Wide);
    assert!((composer.pose().offset - target.offset).length() < 0.05);
    assert!((composer.pose().scale - target.scale).abs() < 0.05);
}

#[test]
fn transform_ease_reaches_target() {
    let mut t = Transform::IDENTITY;
    let target = Transform {
        offset: Vec3::new(2.5, -1.0, 0.0),
        rotation: Vec3::new(0.6, -0.2, 0.1),
        scale: 0.6,
    };
    for _ in 0..400 {
        t.ease_toward(&target, 0.05);
    }
    assert!((t.offset - target.offset).length() < 1e-3);
    assert!((t.scale - target.scale).abs() < 1e-3);
}

#[test]
fn highlighted_skill_exposes_the_descriptor() {
    let mut composer = SceneComposer::new(3);
    composer.set_highlight(Some(0));
    assert_eq!(composer.highlighted_skill().unwrap().name, SKILLS[0].name);
}
