//! Point-like items the hull algorithm can operate on.

use glam::DVec2;

/// Anything with a fixed position in the plane.
///
/// # Examples
/// ```
/// use hull_geometry::{DVec2, Planar};
///
/// struct Pin {
///     id: u32,
///     at: DVec2,
/// }
///
/// impl Planar for Pin {
///     fn position(&self) -> DVec2 {
///         self.at
///     }
/// }
///
/// let pin = Pin { id: 7, at: DVec2::new(1.0, 2.0) };
/// assert_eq!(pin.position().y, 2.0);
/// # let _ = pin.id;
/// ```
pub trait Planar {
    /// Position of the item.
    fn position(&self) -> DVec2;
}

impl Planar for DVec2 {
    fn position(&self) -> DVec2 {
        *self
    }
}

impl Planar for (f64, f64) {
    fn position(&self) -> DVec2 {
        DVec2::new(self.0, self.1)
    }
}

impl<P: Planar + ?Sized> Planar for &P {
    fn position(&self) -> DVec2 {
        (**self).position()
    }
}
