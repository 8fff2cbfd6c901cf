use ratatui::layout::Rect;

/// Height of one bordered widget row.
pub const WIDGET_ROW_HEIGHT: u16 = 3;

/// Split the frame into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = 3.min(area.height);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Stack widget rows from the top of the body. Rows that would not fit
/// completely are dropped rather than clipped mid-border.
pub fn widget_rows(body: Rect, count: usize) -> Vec<Rect> {
    let mut rows = Vec::with_capacity(count);
    for idx in 0..count {
        let y = body.y + (idx as u16).saturating_mul(WIDGET_ROW_HEIGHT);
        if y + WIDGET_ROW_HEIGHT > body.y + body.height {
            break;
        }
        rows.push(Rect {
            x: body.x,
            y,
            width: body.width,
            height: WIDGET_ROW_HEIGHT,
        });
    }
    rows
}
