//! Views bind the controllers to the page: they look up the collaborating elements, register the
//! event listeners and apply the results back to the DOM.
//!
//! Every view owns its listener slots. Dropping a view unregisters its listeners.

pub mod finder;
pub mod footer;
pub mod lazy_images;
pub mod notification;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod subscribe;

use crate::controller::effects::Rect;

use nalgebra::Vector2;
use showcase_system_web::Element;
use showcase_system_web::MouseEvent;



/// Client rectangle of the element.
pub fn client_rect(element:&Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(),rect.top(),rect.width(),rect.height())
}

/// Pointer position of the event in client coordinates.
pub fn client_position(event:&MouseEvent) -> Vector2<f64> {
    Vector2::new(f64::from(event.client_x()),f64::from(event.client_y()))
}
