use glam::{Vec2, Vec3};
use web_sys as web;

/// Last known pointer position in normalized device coordinates, shared
/// between the event handlers and the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc_x: f32,
    pub ndc_y: f32,
    pub on_canvas: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// CSS-space coordinates inside an element -> normalized device coordinates
/// (-1..1 on both axes, +y up).
#[inline]
pub fn ndc_from_css(x_css: f32, y_css: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    [(x_css / width) * 2.0 - 1.0, 1.0 - (y_css / height) * 2.0]
}

/// Pointer NDC relative to the canvas' CSS box.
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    ndc_from_css(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Pointer position in the canvas' backing-store pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Project pointer NDC onto the z = 0 focal plane in world units.
#[inline]
pub fn pointer_world(ndc: [f32; 2], half_width: f32, half_height: f32) -> Vec3 {
    Vec3::new(ndc[0] * half_width, ndc[1] * half_height, 0.0)
}

/// Nearest sphere hit along a ray, if any.
#[inline]
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, targets: &[(Vec3, f32)]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in targets.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, *radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
