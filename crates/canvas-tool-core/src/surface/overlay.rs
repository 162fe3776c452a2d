//! Selection outline rendered as SVG path data.

use super::OverlaySurface;
use crate::editor::OutlineStyle;
use crate::geometry::Point;

/// An [`OverlaySurface`] that remembers the current quadrilateral.
///
/// The host renders [`SelectionOverlay::path_data`] into an `<svg><path>`
/// laid over the canvas, stroked with [`SelectionOverlay::style`].
#[derive(Debug, Clone, Default)]
pub struct SelectionOverlay {
    quad: Option<[Point; 4]>,
    style: OutlineStyle,
}

impl SelectionOverlay {
    pub fn new(style: OutlineStyle) -> Self {
        Self { quad: None, style }
    }

    pub fn quad(&self) -> Option<[Point; 4]> {
        self.quad
    }

    pub fn style(&self) -> &OutlineStyle {
        &self.style
    }

    pub fn is_empty(&self) -> bool {
        self.quad.is_none()
    }

    /// SVG `d` attribute for the outline, e.g. `M10,10 L10,40 L60,40 L60,10Z`.
    pub fn path_data(&self) -> Option<String> {
        let [a, b, c, d] = self.quad?;
        Some(format!(
            "M{},{} L{},{} L{},{} L{},{}Z",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
        ))
    }
}

impl OverlaySurface for SelectionOverlay {
    fn draw_quad(&mut self, quad: [Point; 4]) {
        self.quad = Some(quad);
    }

    fn clear(&mut self) {
        self.quad = None;
    }
}
