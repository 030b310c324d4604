//! Scene composition: layout targets per phase, the live scene pose, the
//! highlight selection and the per-frame instance list handed to the
//! renderer.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;
use crate::physics::{ease_alpha, ease_to_rest, step_free, FloatBounds, Kinematics};
use crate::state::{DeviceClass, PresentationState};

/// Static descriptor for one keycap.
#[derive(Clone, Copy, Debug)]
pub struct SkillInfo {
    pub name: &'static str,
    pub color_rgb: [f32; 3],
    pub icon: &'static str,
    pub blurb: &'static str,
}

/// The fixed set of keycaps, one per tool. Order is the grid order.
pub const SKILLS: [SkillInfo; 15] = [
    SkillInfo { name: "Scikit-Learn", color_rgb: [0.969, 0.576, 0.118], icon: "/assets/tools/scikit.png", blurb: "Machine Learning" },
    SkillInfo { name: "CSS", color_rgb: [0.082, 0.447, 0.714], icon: "/assets/tools/css.png", blurb: "Styling" },
    SkillInfo { name: "JS", color_rgb: [0.969, 0.875, 0.118], icon: "/assets/tools/js.png", blurb: "Logic" },
    SkillInfo { name: "TS", color_rgb: [0.192, 0.471, 0.776], icon: "/assets/tools/ts.png", blurb: "Type Safe" },
    SkillInfo { name: "React", color_rgb: [0.380, 0.855, 0.984], icon: "/assets/tools/reactjs.png", blurb: "Frontend" },
    SkillInfo { name: "Next", color_rgb: [1.0, 1.0, 1.0], icon: "/assets/tools/nextjs.png", blurb: "Framework" },
    SkillInfo { name: "Tailwind", color_rgb: [0.024, 0.714, 0.831], icon: "/assets/tools/tailwind.png", blurb: "Styling" },
    SkillInfo { name: "PostgreSQL", color_rgb: [0.200, 0.404, 0.569], icon: "/assets/tools/postgresql.png", blurb: "Advanced Database" },
    SkillInfo { name: "PHP", color_rgb: [0.467, 0.482, 0.706], icon: "/assets/tools/php.png", blurb: "Server" },
    SkillInfo { name: "Laravel", color_rgb: [1.0, 0.176, 0.125], icon: "/assets/tools/laravel.png", blurb: "PHP Framework" },
    SkillInfo { name: "MySQL", color_rgb: [0.267, 0.475, 0.631], icon: "/assets/tools/mysql.png", blurb: "Database" },
    SkillInfo { name: "Firebase", color_rgb: [1.0, 0.792, 0.157], icon: "/assets/tools/firebase.png", blurb: "BaaS" },
    SkillInfo { name: "Figma", color_rgb: [0.949, 0.306, 0.118], icon: "/assets/tools/figma.png", blurb: "Design" },
    SkillInfo { name: "Git", color_rgb: [0.941, 0.314, 0.196], icon: "/assets/tools/github.png", blurb: "Version Control" },
    SkillInfo { name: "Python", color_rgb: [0.216, 0.463, 0.671], icon: "/assets/tools/python.png", blurb: "AI & Data Science" },
];

/// Offset + XYZ Euler rotation + uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub offset: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        offset: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.offset,
        )
    }

    /// Move every component a fraction `alpha` of the way to `target`.
    pub fn ease_toward(&mut self, target: &Transform, alpha: f32) {
        self.offset += (target.offset - self.offset) * alpha;
        self.rotation += (target.rotation - self.rotation) * alpha;
        self.scale += (target.scale - self.scale) * alpha;
    }
}

/// Target transform of one keycap slot for a phase. Pure in
/// (state, device, index); no layout state is carried between calls.
pub fn object_target(state: PresentationState, device: DeviceClass, index: usize) -> Transform {
    match state {
        PresentationState::Intro => Transform {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 0.5,
        },
        PresentationState::Profile => Transform {
            // one shared decorative cluster behind the profile text
            offset: Vec3::new(-3.0, 1.0, -4.0),
            rotation: Vec3::ZERO,
            scale: 0.5,
        },
        _ => {
            let factor = device.scale_factor();
            let col = (index % GRID_COLUMNS) as f32;
            let row = (index / GRID_COLUMNS) as f32;
            Transform {
                offset: Vec3::new(
                    (col - 2.0) * GRID_SPACING * factor,
                    0.0,
                    (row - 1.0) * GRID_SPACING * factor,
                ),
                rotation: Vec3::ZERO,
                scale: factor,
            }
        }
    }
}

/// Target pose of the whole scene group for a phase. Pure in (state, device).
pub fn scene_pose(state: PresentationState, device: DeviceClass) -> Transform {
    let narrow = device == DeviceClass::Narrow;
    match state {
        PresentationState::Intro | PresentationState::Profile => Transform::IDENTITY,
        PresentationState::Skills => Transform {
            offset: if narrow {
                Vec3::new(0.0, -1.8, 0.0)
            } else {
                Vec3::new(2.5, -1.0, 0.0)
            },
            rotation: Vec3::new(0.6, -0.2, if narrow { 0.0 } else { 0.1 }),
            scale: 1.0,
        },
        PresentationState::Projects => Transform {
            offset: if narrow {
                Vec3::new(0.0, -1.5, 0.0)
            } else {
                Vec3::new(3.5, -0.8, 0.0)
            },
            rotation: Vec3::new(0.1, core::f32::consts::PI - 0.4, 0.0),
            scale: 0.6,
        },
        PresentationState::Guestbook => Transform {
            offset: if narrow {
                Vec3::new(0.0, -2.0, 0.0)
            } else {
                Vec3::new(-3.5, -0.5, 0.0)
            },
            rotation: Vec3::new(0.2, 0.4, 0.0),
            scale: 0.7,
        },
    }
}

/// One keycap: its descriptor, its live slot transform and its kinematics.
#[derive(Clone, Debug)]
pub struct FloatingObject {
    pub info: SkillInfo,
    pub slot: Transform,
    pub kinematics: Kinematics,
}

/// Timed random highlight selection for narrow viewports.
pub struct HighlightCycler {
    accum: f32,
    rng: StdRng,
}

impl HighlightCycler {
    pub fn new(seed: u64) -> Self {
        Self {
            accum: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance by `dt`; returns a fresh pick each time the interval elapses.
    /// Picks are uniform over `0..len` and may repeat.
    pub fn tick(&mut self, dt: f32, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.accum += dt;
        let mut pick = None;
        while self.accum >= HIGHLIGHT_CYCLE_SEC {
            self.accum -= HIGHLIGHT_CYCLE_SEC;
            pick = Some(self.rng.gen_range(0..len));
        }
        pick
    }
}

/// Instance record uploaded to the GPU, one per drawn quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub rot: f32,
    pub glow: f32,
}

/// Owns the floating objects and everything derived per frame: slot easing,
/// physics stepping, the scene pose, the chassis reveal and the highlight.
pub struct SceneComposer {
    objects: Vec<FloatingObject>,
    pose: Transform,
    chassis_scale: f32,
    highlight: Option<usize>,
    cycler: HighlightCycler,
}

impl SceneComposer {
    pub fn new(seed: u64) -> Self {
        let objects = SKILLS
            .iter()
            .enumerate()
            .map(|(i, info)| {
                // Per-object RNG derived from the base seed so each keycap's
                // drift is independent of the others.
                let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let mut rng = StdRng::seed_from_u64(mix);
                FloatingObject {
                    info: *info,
                    slot: object_target(PresentationState::Intro, DeviceClass::Wide, i),
                    kinematics: Kinematics::spawn(&mut rng),
                }
            })
            .collect();
        Self {
            objects,
            pose: Transform::IDENTITY,
            chassis_scale: 0.0,
            highlight: None,
            cycler: HighlightCycler::new(seed.rotate_left(17)),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[FloatingObject] {
        &self.objects
    }

    pub fn pose(&self) -> &Transform {
        &self.pose
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn highlighted_skill(&self) -> Option<&SkillInfo> {
        self.highlight.map(|i| &self.objects[i].info)
    }

    /// Replace the selection. At most one object is ever highlighted.
    pub fn set_highlight(&mut self, index: Option<usize>) {
        self.highlight = index.filter(|i| *i < self.objects.len());
    }

    /// Advance the whole scene by one frame. Returns true when the automatic
    /// cycler changed the highlight (so callers can refresh the detail
    /// panel).
    pub fn update(
        &mut self,
        dt: f32,
        state: PresentationState,
        device: DeviceClass,
        bounds: FloatBounds,
        pointer_world: Option<Vec3>,
    ) -> bool {
        let slot_alpha = ease_alpha(dt, POSE_EASE_TAU_SEC);
        for (i, obj) in self.objects.iter_mut().enumerate() {
            let target = object_target(state, device, i);
            obj.slot.ease_toward(&target, slot_alpha);
            if state.is_free_floating() {
                step_free(&mut obj.kinematics, bounds, pointer_world, dt);
            } else {
                ease_to_rest(&mut obj.kinematics, dt);
            }
        }

        let pose_target = scene_pose(state, device);
        self.pose.ease_toward(&pose_target, slot_alpha);

        let chassis_target = if state.is_free_floating() {
            0.0
        } else {
            device.scale_factor()
        };
        self.chassis_scale +=
            (chassis_target - self.chassis_scale) * ease_alpha(dt, CHASSIS_EASE_TAU_SEC);

        // Timed highlight cycling replaces hover on narrow screens, but only
        // while the grid is the focus.
        if device == DeviceClass::Narrow && state == PresentationState::Skills {
            if let Some(pick) = self.cycler.tick(dt, self.objects.len()) {
                self.highlight = Some(pick);
                return true;
            }
        }
        false
    }

    /// World-space pick spheres, in object order.
    pub fn pick_targets(&self) -> SmallVec<[(Vec3, f32); 16]> {
        let pose_mat = self.pose.to_mat4();
        self.objects
            .iter()
            .map(|obj| {
                let local = obj.slot.offset + obj.kinematics.position * obj.slot.scale;
                let center = pose_mat.transform_point3(local);
                (center, PICK_RADIUS * obj.slot.scale * self.pose.scale)
            })
            .collect()
    }

    /// Build the instance list for the renderer: every keycap plus the
    /// chassis plate once it has any size.
    pub fn compose(&self) -> SmallVec<[RenderInstance; 16]> {
        let pose_mat = self.pose.to_mat4();
        let mut instances: SmallVec<[RenderInstance; 16]> = SmallVec::new();
        for (i, obj) in self.objects.iter().enumerate() {
            let active = self.highlight == Some(i);
            let mut local = obj.slot.offset + obj.kinematics.position * obj.slot.scale;
            if active {
                local.y -= KEYCAP_PRESS_DEPTH * obj.slot.scale;
            }
            let world = pose_mat.transform_point3(local);
            instances.push(RenderInstance {
                pos: world.to_array(),
                scale: KEYCAP_SIZE * obj.slot.scale * self.pose.scale,
                color: [
                    obj.info.color_rgb[0],
                    obj.info.color_rgb[1],
                    obj.info.color_rgb[2],
                    1.0,
                ],
                rot: obj.kinematics.rotation.z,
                glow: if active { 1.0 } else { 0.0 },
            });
        }
        if self.chassis_scale > 0.01 {
            let world = pose_mat.transform_point3(CHASSIS_OFFSET);
            instances.push(RenderInstance {
                pos: world.to_array(),
                scale: CHASSIS_SIZE * self.chassis_scale * self.pose.scale,
                color: [CHASSIS_COLOR[0], CHASSIS_COLOR[1], CHASSIS_COLOR[2], 1.0],
                rot: 0.0,
                glow: 0.0,
            });
        }
        instances
    }
}
