//! raylib frontends: the interactive window and the video export loop.

use std::ffi::CString;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use raylib::prelude::*;

use crate::canvas::{Canvas, Point, Rect, Rgba};
use crate::constants::*;
use crate::ffmpeg::{Ffmpeg, frames_for};
use crate::presenter::Presenter;
use crate::render::{NavBar, paint_frame, window_to_frame};

/// [`Canvas`] over any raylib draw handle.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn vec2(p: Point) -> Vector2 {
    Vector2::new(p.x, p.y)
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn text(&mut self, text: &str, at: Point, size: f32, c: Rgba) {
        self.d.draw_text(text, at.x.round() as i32, at.y.round() as i32, size.round() as i32, color(c));
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        match CString::new(text) {
            // Default font, which raylib loads with the window
            Ok(c_text) => unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), size.round() as i32) as f32 },
            Err(_) => text.chars().count() as f32 * size * 0.5,
        }
    }

    fn rect(&mut self, r: Rect, roundness: f32, c: Rgba) {
        let rec = Rectangle::new(r.x, r.y, r.width, r.height);
        if roundness > 0.0 {
            self.d.draw_rectangle_rounded(rec, roundness, 16, color(c));
        } else {
            self.d.draw_rectangle_rec(rec, color(c));
        }
    }

    fn circle(&mut self, center: Point, radius: f32, c: Rgba) {
        self.d.draw_circle_v(vec2(center), radius, color(c));
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, c: Rgba) {
        self.d.draw_line_ex(vec2(from), vec2(to), thickness, color(c));
    }

    fn ring(&mut self, center: Point, inner: f32, outer: f32, start: f32, end: f32, c: Rgba) {
        self.d.draw_ring(vec2(center), inner, outer, start, end, 64, color(c));
    }
}

fn open_window(width: i32, height: i32) -> (RaylibHandle, RaylibThread) {
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    (rl, thread)
}

fn load_framebuffer(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<RenderTexture2D> {
    rl.load_render_texture(thread, RENDER_WIDTH as _, RENDER_HEIGHT as _)
        .map_err(|e| anyhow!("Failed to create render texture: {:?}", e))
}

// Paints the current slide into the fixed size framebuffer
fn render_frame(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    framebuffer: &mut RenderTexture2D,
    presenter: &Presenter,
    pointer: Option<Point>,
) {
    rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
        let mut d = tmd.begin_drawing(thread);
        d.clear_background(Color::WHITE);
        let mut canvas = RaylibCanvas::new(&mut d);
        paint_frame(presenter, &mut canvas, pointer);
    });
}

// Draws the framebuffer stretched over the window. Render textures are
// stored upside down, hence the negative source height.
fn present(rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &RenderTexture2D) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);

    let sw = d.get_screen_width() as f32;
    let sh = d.get_screen_height() as f32;

    d.draw_texture_pro(
        framebuffer,
        Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
        Rectangle::new(0.0, 0.0, sw, sh),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

/// Interactive mode: click the on-screen buttons to move through the deck.
pub fn run(presenter: &mut Presenter, width: i32, height: i32) -> Result<()> {
    let (mut rl, thread) = open_window(width, height);
    let mut framebuffer = load_framebuffer(&mut rl, &thread)?;
    info!("Presenting {} slides", presenter.len());

    while !rl.window_should_close() {
        let mouse = rl.get_mouse_position();
        let pointer = window_to_frame(
            Point::new(mouse.x, mouse.y),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(action) = NavBar::for_presenter(presenter).hit(pointer) {
                presenter.apply(action);
            }
        }

        render_frame(&mut rl, &thread, &mut framebuffer, presenter, Some(pointer));
        present(&mut rl, &thread, &framebuffer);
    }

    Ok(())
}

/// Export mode: shows every slide for `seconds_per_slide` and encodes the
/// result to `output` through ffmpeg.
pub fn export(presenter: &mut Presenter, output: &Path, seconds_per_slide: f32, width: i32, height: i32) -> Result<()> {
    let (mut rl, thread) = open_window(width, height);
    let mut framebuffer = load_framebuffer(&mut rl, &thread)?;
    let mut ffmpeg = Ffmpeg::spawn(RENDER_WIDTH, RENDER_HEIGHT, FPS, output)
        .with_context(|| format!("Cannot export to {}", output.display()))?;
    let repeat = frames_for(seconds_per_slide, FPS);

    loop {
        if rl.window_should_close() {
            warn!("Window closed, export stopped at slide {}", presenter.indicator());
            break;
        }

        render_frame(&mut rl, &thread, &mut framebuffer, presenter, None);

        // Grab rendered texture pixels as an Image
        let image = framebuffer
            .load_image()
            .map_err(|e| anyhow!("Failed to read back framebuffer: {:?}", e))?;
        let len = (image.width() * image.height() * 4) as usize; // 4 bytes per pixel (RGBA)
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, len) };
        for _ in 0..repeat {
            ffmpeg.write_frame(pixels)?;
        }

        present(&mut rl, &thread, &framebuffer);

        if !presenter.next() {
            break;
        }
    }

    ffmpeg.finish().context("ffmpeg did not complete the video")?;
    info!("Exported {}", output.display());
    Ok(())
}
