pub mod config;
pub mod delta;
pub mod log;

use std::time::Duration;

use crate::eyes::Scene;
use crate::graphics::PixelBuffer;
use crate::math::Vec2;

pub const DEFAULT_WIDTH: u16 = 800;
pub const DEFAULT_HEIGHT: u16 = 600;
pub const DEFAULT_SCALE: u8 = 1;
pub const DEFAULT_FPS: u32 = 60;

pub const MAX_SCALE_FACTOR: u8 = 8;
pub const FPS_CAP: u32 = 240;

/// Per-axis resolution cap for the pixel canvas.
pub const MAX_WIDTH: u16 = 4096;
pub const MAX_HEIGHT: u16 = 4096;

/// Main program struct.
///
/// Owns the pixel canvas and the eye scene; the window layer calls
/// `frame()` once per redraw and presents `pix` afterwards.
pub struct Program {
    pub pix: PixelBuffer,
    pub scene: Scene,

    delta: delta::Delta,

    quiet: bool,
    scale: u8,
    fps: u32,
    refresh_rate: Duration,

    win_w: u16,
    win_h: u16,
}

impl Program {
    pub fn new() -> Self {
        let (w, h) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);

        Self {
            pix: PixelBuffer::new(w as usize, h as usize),
            scene: Scene::new(w as f32, h as f32, None),

            delta: delta::Delta::new(),

            quiet: false,
            scale: DEFAULT_SCALE,
            fps: DEFAULT_FPS,
            refresh_rate: Duration::from_micros(1_000_000 / DEFAULT_FPS as u64),

            win_w: w,
            win_h: h,
        }
    }

    /// Advance the scene by the measured frame delta and redraw it
    /// into the canvas.
    pub fn frame(&mut self) {
        let dt = self.delta.tick();
        self.scene.frame(dt);
        self.scene.render(&mut self.pix);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let scale = self.scale as f32;
        self.scene
            .pointer_moved(Vec2::new(x as f32 / scale, y as f32 / scale));
    }

    /// Resize the canvas and tell the scene about it. Entities are not
    /// reset.
    pub fn update_size<T>(&mut self, s: (T, T))
    where
        u16: TryFrom<T>,
    {
        let (w, h) = match (u16::try_from(s.0), u16::try_from(s.1)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => panic!("Size overflow!"),
        };

        self.win_w = w;
        self.win_h = h;
        self.pix.resize(w as usize, h as usize);
        self.scene.set_size(w as f32, h as f32);
    }

    pub fn change_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(1, FPS_CAP);
        self.refresh_rate = Duration::from_micros(1_000_000 / self.fps as u64);
    }

    pub fn refresh_rate(&self) -> Duration {
        self.refresh_rate
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn size(&self) -> (u16, u16) {
        (self.win_w, self.win_h)
    }
}
