use folio_core::{CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

/// Compute a world-space ray from coordinates in the canvas' backing store
/// space, using the app's fixed look-at camera.
#[inline]
pub fn screen_to_world_ray(canvas: &web::HtmlCanvasElement, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = (canvas.width() as f32).max(1.0);
    let height = (canvas.height() as f32).max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height;
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, CAMERA_Z);
    let rd = (far - ro).normalize();
    (ro, rd)
}
