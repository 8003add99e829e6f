//! On-screen overlays drawn into the character buffer after the mesh.

use crate::core::CharBuffer;
use crate::types::HUD_MARGIN;

pub fn fps_text(fps: f64) -> String {
    format!("FPS: {fps:.2}")
}

/// Draw the FPS counter `HUD_MARGIN` rows above the bottom edge, ending
/// `HUD_MARGIN` columns before the right edge. Skipped when the buffer is
/// too small to hold it.
pub fn draw_fps(cb: &mut CharBuffer, fps: f64) {
    let text = fps_text(fps);
    let len = text.chars().count() as u16;
    let Some(y) = cb.height().checked_sub(HUD_MARGIN) else {
        return;
    };
    let Some(x) = cb.width().checked_sub(len + HUD_MARGIN) else {
        return;
    };
    cb.put_str(x, y, &text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(fps_text(59.996), "FPS: 60.00");
        assert_eq!(fps_text(12.3456), "FPS: 12.35");
    }

    #[test]
    fn placed_from_bottom_right() {
        let mut cb = CharBuffer::new(40, 20);
        draw_fps(&mut cb, 12.34);
        let text = "FPS: 12.34";
        let x0 = 40 - text.len() as u16 - HUD_MARGIN;
        let y = 20 - HUD_MARGIN;
        for (i, ch) in text.chars().enumerate() {
            assert_eq!(cb.get(x0 + i as u16, y), Some(ch));
        }
        assert_eq!(cb.written().len(), text.len());
    }

    #[test]
    fn skipped_on_tiny_buffers() {
        let mut cb = CharBuffer::new(12, 5);
        draw_fps(&mut cb, 60.0);
        assert!(cb.written().is_empty());
    }
}
