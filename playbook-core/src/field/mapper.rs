//! Logical field units to render-surface pixels.
//!
//! All functions here are pure: the same container size, dimensions and options always produce
//! the same transform, so recomputing on every resize never accumulates drift.

use crate::field::standards::FieldDimensions;
use crate::foundation::core::Point;

/// Padding left around the field when fitting it into a container.
pub const DEFAULT_PADDING_PX: f64 = 20.0;

/// Strategy used to fit the field into its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Largest scale at which the whole field is visible.
    #[default]
    Contain,
    /// Field length fills the available width.
    FitWidth,
    /// Field width fills the available height.
    FitHeight,
    /// Identity transform; the host manages pan and zoom itself.
    Manual,
}

/// Render container size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ContainerSize {
    /// Build a container size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport fitting options.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportOpts {
    /// Fit strategy.
    #[serde(default)]
    pub fit: FitMode,
    /// Padding in pixels on every side.
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_padding() -> f64 {
    DEFAULT_PADDING_PX
}

impl Default for ViewportOpts {
    fn default() -> Self {
        Self {
            fit: FitMode::Contain,
            padding: DEFAULT_PADDING_PX,
        }
    }
}

/// Uniform scale plus translation from logical units to pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportTransform {
    /// Pixels per logical unit.
    pub scale: f64,
    /// Horizontal offset of the field origin in pixels.
    pub x: f64,
    /// Vertical offset of the field origin in pixels.
    pub y: f64,
}

impl ViewportTransform {
    /// Transform that maps one logical unit to one pixel.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Project a logical point to pixels.
    pub fn project(&self, p: Point) -> Point {
        Point::new(
            self.x + to_pixels(p.x, self.scale),
            self.y + to_pixels(p.y, self.scale),
        )
    }

    /// Map a pixel point back to logical units.
    pub fn unproject(&self, p: Point) -> Point {
        Point::new(
            to_logical(p.x - self.x, self.scale),
            to_logical(p.y - self.y, self.scale),
        )
    }

    /// Equivalent `kurbo` affine transform.
    pub fn to_affine(&self) -> kurbo::Affine {
        kurbo::Affine::translate((self.x, self.y)) * kurbo::Affine::scale(self.scale)
    }
}

/// Convert a logical coordinate to pixels.
pub fn to_pixels(logical: f64, scale: f64) -> f64 {
    logical * scale
}

/// Convert a pixel coordinate to logical units. A non-positive or non-finite scale maps to 0.
pub fn to_logical(pixels: f64, scale: f64) -> f64 {
    if !scale.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    pixels / scale
}

/// Pixels-per-unit scale for fitting `dims` into `container`.
///
/// Available space is clamped to at least one pixel per axis so tiny or collapsed containers
/// never produce a zero, negative or NaN scale.
pub fn compute_scale(
    container: ContainerSize,
    dims: &FieldDimensions,
    fit: FitMode,
    padding: f64,
) -> f64 {
    let avail_w = (container.width - padding * 2.0).max(1.0);
    let avail_h = (container.height - padding * 2.0).max(1.0);
    let ratio_w = avail_w / dims.length;
    let ratio_h = avail_h / dims.width;

    match fit {
        FitMode::Contain => ratio_w.min(ratio_h),
        FitMode::FitWidth => ratio_w,
        FitMode::FitHeight => ratio_h,
        FitMode::Manual => 1.0,
    }
}

/// Fit the field into `container` and center it.
pub fn compute_transform(
    container: ContainerSize,
    dims: &FieldDimensions,
    opts: ViewportOpts,
) -> ViewportTransform {
    if opts.fit == FitMode::Manual {
        return ViewportTransform::IDENTITY;
    }
    let scale = compute_scale(container, dims, opts.fit, opts.padding);
    ViewportTransform {
        scale,
        x: (container.width - dims.length * scale) / 2.0,
        y: (container.height - dims.width * scale) / 2.0,
    }
}

/// Project a logical point through `t`.
pub fn project_point(t: &ViewportTransform, p: Point) -> Point {
    t.project(p)
}

/// Map a pixel point back through `t`.
pub fn unproject_point(t: &ViewportTransform, p: Point) -> Point {
    t.unproject(p)
}

#[cfg(test)]
#[path = "../../tests/unit/field/mapper.rs"]
mod tests;
