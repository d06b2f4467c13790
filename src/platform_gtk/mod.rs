use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;

use crate::render::{CairoSurface, ShapeRenderSnapshot, ShapeRenderer};

/// GTK drawing area hosting one [`ShapeRenderer`].
///
/// The widget scale factor is used as the pixel ratio, so shapes snap to the
/// device pixel grid on high-density displays.
#[derive(Debug, Clone)]
pub struct GtkShapeArea {
    area: gtk::DrawingArea,
    renderer: Rc<RefCell<ShapeRenderer>>,
}

impl GtkShapeArea {
    #[must_use]
    pub fn new() -> Self {
        let area = gtk::DrawingArea::new();
        let renderer = Rc::new(RefCell::new(ShapeRenderer::new()));

        let draw_renderer = Rc::clone(&renderer);
        area.set_draw_func(move |area, context, _width, _height| {
            let pixel_ratio = f64::from(area.scale_factor().max(1));
            // GTK hands out a logical-pixel context; draw in device pixels.
            context.save().ok();
            context.scale(1.0 / pixel_ratio, 1.0 / pixel_ratio);
            let mut surface = CairoSurface::new(context);
            draw_renderer
                .borrow()
                .draw(&mut surface, pixel_ratio, false, None);
            context.restore().ok();
        });

        Self { area, renderer }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the snapshot and schedules a redraw.
    pub fn set_data(&self, snapshot: ShapeRenderSnapshot) {
        self.renderer.borrow_mut().set_data(snapshot);
        self.area.queue_draw();
    }
}

impl Default for GtkShapeArea {
    fn default() -> Self {
        Self::new()
    }
}
