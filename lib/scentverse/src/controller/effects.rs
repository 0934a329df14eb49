//! Geometry of the decorative effects: reveal mode, hero parallax, button ripple and lazy images.
//!
//! All functions are pure; the views feed them with measurements taken from the DOM.

use crate::constants;

use nalgebra::Vector2;



// ==============
// === Pixels ===
// ==============

/// Round half up, like JavaScript's `Math.round`.
pub fn round_half_up(value:f64) -> f64 {
    (value + 0.5).floor()
}

/// CSS pixel length. Negative zero is printed as `0`.
pub fn px(value:f64) -> String {
    format!("{}px", value + 0.0)
}



// ============
// === Rect ===
// ============

/// Client rectangle of an element.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Rect {
    /// Left and top edges.
    pub origin : Vector2<f64>,
    /// Width and height.
    pub size   : Vector2<f64>,
}

impl Rect {
    /// Constructor.
    pub fn new(left:f64, top:f64, width:f64, height:f64) -> Self {
        let origin = Vector2::new(left,top);
        let size   = Vector2::new(width,height);
        Self {origin,size}
    }

    /// The larger of width and height.
    pub fn max_dimension(&self) -> f64 {
        self.size.x.max(self.size.y)
    }

    /// Position of the point relative to the rect's center, as a fraction of the rect's size:
    /// `(-0.5,-0.5)` at the top-left corner, `(0.5,0.5)` at the bottom-right one. Degenerate
    /// dimensions yield `0.0`.
    pub fn normalized_offset(&self, point:Vector2<f64>) -> Vector2<f64> {
        let relative = point - self.origin;
        let axis     = |offset:f64, size:f64| if size > 0.0 { offset / size - 0.5 } else { 0.0 };
        Vector2::new(axis(relative.x,self.size.x),axis(relative.y,self.size.y))
    }
}



// ==============
// === Reveal ===
// ==============

/// How reveal targets are shown.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum RevealMode {
    /// Show everything at once, without animation.
    Immediate,
    /// Animate each target the first time it scrolls into view.
    OnScroll,
}

impl RevealMode {
    /// Reduced motion or a missing `IntersectionObserver` disable the animation.
    pub fn select(prefers_reduced_motion:bool, supports_observer:bool) -> Self {
        if prefers_reduced_motion || !supports_observer { Self::Immediate } else { Self::OnScroll }
    }
}



// ================
// === Parallax ===
// ================

/// Value of the hero `background-position` for the page scroll offset.
pub fn parallax_background_position(scroll_y:f64) -> String {
    let offset = round_half_up(scroll_y * constants::PARALLAX_SCROLL_FACTOR);
    format!("center {}", px(offset))
}

/// Offset of the hero content for the pointer position within the hero.
pub fn parallax_content_offset(hero:&Rect, pointer:Vector2<f64>) -> Vector2<f64> {
    hero.normalized_offset(pointer) * constants::PARALLAX_POINTER_FACTOR
}

/// Value of the hero content `transform` for the given offset.
pub fn parallax_content_transform(offset:Vector2<f64>) -> String {
    format!("translate3d({}, {}, 0)", px(offset.x), px(offset.y))
}

/// Transform restoring the hero content when the pointer leaves the hero.
pub const PARALLAX_RESET_TRANSFORM : &str = "translate3d(0,0,0)";



// ==============
// === Ripple ===
// ==============

/// Circle spawned where a control was clicked, in the control's local coordinates.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Ripple {
    /// Diameter.
    pub size     : f64,
    /// Top-left corner of the circle's bounding box.
    pub position : Vector2<f64>,
}

impl Ripple {
    /// Ripple centered at the click point, sized relative to the control's larger dimension.
    pub fn new(control:&Rect, click:Vector2<f64>) -> Self {
        let size     = control.max_dimension() * constants::RIPPLE_SCALE;
        let half     = Vector2::new(size,size) / 2.0;
        let position = click - control.origin - half;
        Self {size,position}
    }
}



// ===================
// === Lazy Images ===
// ===================

/// Value of the `loading` attribute applied to images.
pub const LAZY_LOADING : &str = "lazy";

/// An image without a `loading` value gets lazy loading. Explicit values are kept.
pub fn needs_lazy_loading(loading:Option<&str>) -> bool {
    loading.map_or(true,str::is_empty)
}



// =============
// === Tests ===
// =============
