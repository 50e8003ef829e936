use crate::graphics::{arrow_path, draw_arrow, draw_centered_label, draw_label, draw_panel};
use crate::state::AppState;
use druid::kurbo::{Point, Rect};
use druid::widget::prelude::*;
use druid::{commands, Color, MouseButton, Widget};

/// Direction-matching widget: a target arrow and a draggable arrow
pub struct ArrowWidget {
    /// Is the user currently dragging the rotatable arrow?
    dragging: bool,
    /// Mouse position at the start of the drag gesture
    drag_origin: Point,
    /// Latest cumulative horizontal drag displacement, for the debug overlay
    drag_delta: f64,
    /// Widget size
    size: Size,
}

impl ArrowWidget {
    pub fn new() -> Self {
        ArrowWidget {
            dragging: false,
            drag_origin: Point::ZERO,
            drag_delta: 0.0,
            size: Size::ZERO,
        }
    }

    /// Bounding rectangle of the target (left) arrow panel
    fn target_panel(&self) -> Rect {
        panel_rect(self.size, 0.28)
    }

    /// Bounding rectangle of the draggable (right) arrow panel
    fn draggable_panel(&self) -> Rect {
        panel_rect(self.size, 0.72)
    }
}

/// Computes a square panel centered at the given fraction of the width
fn panel_rect(size: Size, x_fraction: f64) -> Rect {
    let side = (size.width.min(size.height) * 0.38).max(40.0);
    let center = Point::new(size.width * x_fraction, size.height * 0.45);
    Rect::from_center_size(center, Size::new(side, side))
}

impl Widget<AppState> for ArrowWidget {
    /// Handle events for the arrow widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::KeyDown(key_event) => {
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        "d" | "D" => {
                            data.debug = !data.debug;
                            ctx.request_paint();
                        }
                        "q" | "Q" => {
                            // Submit the QUIT_APP command to exit the application
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        _ => {}
                    }
                }
            }
            Event::MouseDown(mouse_event) => {
                if mouse_event.button == MouseButton::Left
                    && self.draggable_panel().contains(mouse_event.pos)
                {
                    self.dragging = true;
                    self.drag_origin = mouse_event.pos;
                    self.drag_delta = 0.0;
                    ctx.set_active(true); // Capture mouse events
                    tracing::debug!(x = mouse_event.pos.x, "drag started");
                }
            }
            Event::MouseMove(mouse_event) => {
                if self.dragging {
                    // Cumulative horizontal displacement since gesture start
                    self.drag_delta = mouse_event.pos.x - self.drag_origin.x;
                    data.drag_changed(self.drag_delta);
                    ctx.request_paint();
                }
            }
            Event::MouseUp(mouse_event) => {
                if mouse_event.button == MouseButton::Left && self.dragging {
                    self.dragging = false;
                    ctx.set_active(false);
                    let was_matched = data.matched;
                    data.drag_ended();
                    if data.matched && !was_matched {
                        tracing::info!(angle = data.current.angle(), "captcha solved");
                    } else {
                        tracing::debug!(
                            angle = data.current.angle(),
                            matched = data.matched,
                            "drag ended"
                        );
                    }
                    ctx.request_paint();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        if let LifeCycle::Size(size) = event {
            self.size = *size;
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the arrow widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        let size = bc.max();
        self.size = size;
        size
    }

    /// Paint the arrow widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        let size = ctx.size();
        ctx.fill(size.to_rect(), &Color::rgb8(24, 24, 28));

        let target_panel = self.target_panel();
        let draggable_panel = self.draggable_panel();
        let panel_fill = Color::rgb8(38, 38, 44);
        let panel_border = Color::rgb8(90, 90, 100);
        draw_panel(ctx, target_panel, panel_fill, panel_border);
        draw_panel(ctx, draggable_panel, panel_fill, panel_border);

        let caption_color = Color::rgb8(150, 150, 160);
        draw_centered_label(
            ctx,
            "Target Direction".to_string(),
            target_panel.center().x,
            target_panel.y0 - 24.0,
            12.0,
            caption_color,
        );
        draw_centered_label(
            ctx,
            "Rotate to Match".to_string(),
            draggable_panel.center().x,
            draggable_panel.y0 - 24.0,
            12.0,
            caption_color,
        );

        // Arrows are oriented by atan2(y, x) of their direction vectors
        let arrow = arrow_path(target_panel.width() * 0.6);
        draw_arrow(
            ctx,
            &arrow,
            target_panel.center(),
            data.target.angle(),
            Color::rgb8(66, 133, 244),
        );
        draw_arrow(
            ctx,
            &arrow,
            draggable_panel.center(),
            data.current.angle(),
            Color::rgb8(158, 158, 158),
        );

        if data.matched {
            draw_centered_label(
                ctx,
                "Images matched! CAPTCHA solved.".to_string(),
                size.width / 2.0,
                draggable_panel.y1 + 28.0,
                16.0,
                Color::rgb8(52, 168, 83),
            );
        }

        // Add debug info if debug mode is enabled
        if data.debug {
            let text_color = Color::WHITE;
            draw_label(
                ctx,
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                Point::new(10.0, 10.0),
                12.0,
                text_color,
            );
            draw_label(
                ctx,
                format!("Target angle: {:.3} rad", data.target.angle()),
                Point::new(10.0, 30.0),
                12.0,
                text_color,
            );
            draw_label(
                ctx,
                format!("Current angle: {:.3} rad", data.current.angle()),
                Point::new(10.0, 50.0),
                12.0,
                text_color,
            );
            draw_label(
                ctx,
                format!("Magnitude: {:.6}", data.current.magnitude()),
                Point::new(10.0, 70.0),
                12.0,
                text_color,
            );
            draw_label(
                ctx,
                format!("Drag delta: {:.1} px", self.drag_delta),
                Point::new(10.0, 90.0),
                12.0,
                text_color,
            );
            draw_label(
                ctx,
                format!("Matched: {}", data.matched),
                Point::new(10.0, 110.0),
                12.0,
                text_color,
            );
        }
    }
}
