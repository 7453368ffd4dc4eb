//! Mouse-driven parallax backdrop.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::theme::Theme;

/// Maximum offset, in cells, at either edge of the screen.
const PARALLAX_RANGE: f32 = 30.0;

/// Shift factor of the far layer.
pub const FAR_FACTOR: f32 = 0.5;
/// Shift factor of the near layer.
pub const NEAR_FACTOR: f32 = 0.8;

/// Pointer-derived offset shared by the backdrop layers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parallax {
    x: f32,
    y: f32,
}

impl Parallax {
    /// Offset for a pointer at `(column, row)` on a `width` x `height` screen.
    ///
    /// The center of the screen maps to zero and the edges to half the range.
    pub fn from_pointer(column: u16, row: u16, width: u16, height: u16) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            x: (f32::from(column) / f32::from(width) - 0.5) * PARALLAX_RANGE,
            y: (f32::from(row) / f32::from(height) - 0.5) * PARALLAX_RANGE,
        }
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Whole-cell shift for a layer moving at `factor` of the offset.
    pub fn layer_shift(&self, factor: f32) -> (i32, i32) {
        (
            (self.x * factor).round() as i32,
            (self.y * factor).round() as i32,
        )
    }
}

/// Two layers of sparse glyphs, each shifted by its own parallax factor.
pub struct Backdrop<'a> {
    parallax: Parallax,
    theme: &'a Theme,
}

impl<'a> Backdrop<'a> {
    pub fn new(parallax: Parallax, theme: &'a Theme) -> Self {
        Self { parallax, theme }
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (far_dx, far_dy) = self.parallax.layer_shift(FAR_FACTOR);
        let (near_dx, near_dy) = self.parallax.layer_shift(NEAR_FACTOR);
        let far = Style::default().fg(self.theme.colors.backdrop_far);
        let near = Style::default().fg(self.theme.colors.backdrop_near);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (fx, fy) = (i32::from(x) - far_dx, i32::from(y) - far_dy);
                let (nx, ny) = (i32::from(x) - near_dx, i32::from(y) - near_dy);

                if nx.rem_euclid(23) == 0 && ny.rem_euclid(7) == 0 {
                    buf[(x, y)].set_char('✦').set_style(near);
                } else if (fx + fy * 7).rem_euclid(11) == 0 {
                    buf[(x, y)].set_char('·').set_style(far);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_has_no_offset() {
        let parallax = Parallax::from_pointer(50, 20, 100, 40);
        assert_eq!(parallax.offset(), (0.0, 0.0));
        assert_eq!(parallax.layer_shift(NEAR_FACTOR), (0, 0));
    }

    #[test]
    fn test_corner_offsets() {
        let top_left = Parallax::from_pointer(0, 0, 100, 40);
        assert_eq!(top_left.offset(), (-15.0, -15.0));
        assert_eq!(top_left.layer_shift(FAR_FACTOR), (-8, -8));
        assert_eq!(top_left.layer_shift(NEAR_FACTOR), (-12, -12));
    }

    #[test]
    fn test_empty_screen_is_neutral() {
        assert_eq!(Parallax::from_pointer(3, 3, 0, 0), Parallax::default());
    }

    #[test]
    fn test_backdrop_moves_with_pointer() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);

        let mut still = Buffer::empty(area);
        Backdrop::new(Parallax::default(), &theme).render(area, &mut still);
        let mut moved = Buffer::empty(area);
        Backdrop::new(Parallax::from_pointer(0, 0, 40, 10), &theme).render(area, &mut moved);

        assert_eq!(still[(0, 0)].symbol(), "✦");
        assert_ne!(still, moved);
    }
}
