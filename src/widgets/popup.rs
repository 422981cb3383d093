use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size sitting immediately above `anchor`, clipped to the
/// space available over it.
pub fn above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let x = anchor.x + x_offset;
    let y = anchor.y.saturating_sub(height);

    Rect {
        x,
        y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
