use druid::kurbo::{Affine, BezPath, Point, Rect};
use druid::piet::{Text, TextLayout, TextLayoutBuilder};
use druid::text::FontFamily;
use druid::{Color, PaintCtx, RenderContext};

/// Builds a right-pointing arrow polygon centered at the origin
pub fn arrow_path(length: f64) -> BezPath {
    let half = length / 2.0;
    let head_len = length * 0.35;
    let head_half = length * 0.2;
    let shaft_half = length * 0.08;

    let mut path = BezPath::new();
    path.move_to((-half, -shaft_half));
    path.line_to((half - head_len, -shaft_half));
    path.line_to((half - head_len, -head_half));
    path.line_to((half, 0.0));
    path.line_to((half - head_len, head_half));
    path.line_to((half - head_len, shaft_half));
    path.line_to((-half, shaft_half));
    path.close_path();
    path
}

/// Fills `path` rotated by `angle` radians about `center`
pub fn draw_arrow(ctx: &mut PaintCtx, path: &BezPath, center: Point, angle: f64, color: Color) {
    ctx.with_save(|ctx| {
        ctx.transform(Affine::translate(center.to_vec2()) * Affine::rotate(angle));
        ctx.fill(path, &color);
    });
}

/// Draws the frame of one arrow panel
pub fn draw_panel(ctx: &mut PaintCtx, rect: Rect, fill: Color, border: Color) {
    let rounded = rect.to_rounded_rect(10.0);
    ctx.fill(rounded, &fill);
    ctx.stroke(rounded, &border, 1.5);
}

/// Draws text with its top-left corner at `pos`
pub fn draw_label(ctx: &mut PaintCtx, text: String, pos: Point, size: f64, color: Color) {
    let text_layout = ctx
        .text()
        .new_text_layout(text)
        .font(FontFamily::SYSTEM_UI, size)
        .text_color(color)
        .build()
        .unwrap();
    ctx.draw_text(&text_layout, pos);
}

/// Draws text horizontally centered on `center_x` with its top edge at `y`
pub fn draw_centered_label(
    ctx: &mut PaintCtx,
    text: String,
    center_x: f64,
    y: f64,
    size: f64,
    color: Color,
) {
    let text_layout = ctx
        .text()
        .new_text_layout(text)
        .font(FontFamily::SYSTEM_UI, size)
        .text_color(color)
        .build()
        .unwrap();
    let width = text_layout.size().width;
    ctx.draw_text(&text_layout, (center_x - width / 2.0, y));
}
