use glam::{Mat4, Vec3};
use zerog_common::CameraPose;

/// Projection settings for turning a camera pose into pixels.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl RenderView {
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            ..Self::default()
        }
    }

    pub fn view_matrix(&self, pose: &CameraPose) -> Mat4 {
        Mat4::look_to_rh(pose.position, pose.forward(), pose.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, pose: &CameraPose) -> Mat4 {
        self.projection_matrix() * self.view_matrix(pose)
    }

    /// Point the camera is looking at, one unit ahead.
    pub fn target(&self, pose: &CameraPose) -> Vec3 {
        pose.position + pose.forward()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the camera pose and view settings, then produces
/// output. It never writes back into the simulation.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given pose and view.
    fn render(&self, pose: &CameraPose, view: &RenderView) -> Self::Output;
}

/// Text renderer for CLI output, logging and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, pose: &CameraPose, view: &RenderView) -> String {
        let p = pose.position;
        let t = view.target(pose);
        format!(
            "eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} fov={:.0}",
            p.x,
            p.y,
            p.z,
            t.x,
            t.y,
            t.z,
            pose.yaw().to_degrees(),
            pose.pitch().to_degrees(),
            view.fov_degrees
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn debug_renderer_reports_pose() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 8.0), 0.0, 0.0);
        let output = DebugTextRenderer::new().render(&pose, &RenderView::default());
        assert!(output.contains("eye=(0.00, 0.00, 8.00)"));
        assert!(output.contains("target=(0.00, 0.00, 7.00)"));
        assert!(output.contains("fov=75"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 75.0);
        assert_eq!(view.near, 0.1);
        assert_eq!(view.far, 1000.0);
    }

    #[test]
    fn point_ahead_projects_to_screen_center() {
        let pose = CameraPose::new(Vec3::new(1.0, -0.5, 3.0), 0.8, -0.3);
        let view = RenderView::with_viewport(1280, 720);
        let ahead = pose.position + pose.forward() * 10.0;
        let clip = view.view_projection(&pose) * Vec4::new(ahead.x, ahead.y, ahead.z, 1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-4);
        assert!((clip.y / clip.w).abs() < 1e-4);
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        let view = RenderView::with_viewport(800, 0);
        assert!(view.aspect.is_finite());
    }
}
