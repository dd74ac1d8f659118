use std::time::Duration;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::*;
use crate::graphics::{color, draw, PixelBuffer, P2};
use crate::math::{lerp, map_range, Vec2};

/// Owns the eye-pair collection and all interaction state. Index 0 is
/// the draggable main eye; everything behind it is a decaying stamp.
pub struct Scene {
    eyes: Vec<EyePair>,
    palette: Palette,
    rng: SmallRng,
    size: Vec2,

    /// Scene time, advanced by the frame delta. The settle timer runs
    /// on this clock.
    clock: Duration,
    settle_started: Option<Duration>,

    dragging: bool,
    drag_offset: Vec2,
    pointer: Vec2,
    prev_pointer: Vec2,
}

impl Scene {
    pub fn new(width: f32, height: f32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };

        let mut scene = Self {
            eyes: Vec::new(),
            palette: Palette::new(),
            rng,
            size: Vec2::new(width, height),
            clock: Duration::ZERO,
            settle_started: None,
            dragging: false,
            drag_offset: Vec2::zero(),
            pointer: Vec2::zero(),
            prev_pointer: Vec2::zero(),
        };

        scene.reset();
        scene
    }

    /// Back to a single fresh main eye at the canvas center with the
    /// initial palette. Bound to every key except Escape.
    pub fn reset(&mut self) {
        self.eyes.clear();
        self.eyes.push(EyePair::new(self.size * 0.5, BASE_DIAMETER));
        self.palette.reset();
        self.dragging = false;
        self.settle_started = None;
    }

    /// Window resizes reach the scene here; entities are left alone.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn pointer_moved(&mut self, p: Vec2) {
        self.pointer = p;
    }

    pub fn press(&mut self) {
        let main = &self.eyes[0];

        if main.hit_test(self.pointer) {
            self.dragging = true;
            self.drag_offset = main.pos - self.pointer;
            self.settle_started = None;
        }
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn eyes(&self) -> &[EyePair] {
        &self.eyes
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// One simulation step: main-eye drag/grow/settle, then physics,
    /// bounce reactions, stamp decay and culling for every entity.
    pub fn frame(&mut self, dt: Duration) {
        self.clock += dt;

        self.drive_main_eye();

        // Reverse order so culling can't skip an entity. Stamps pushed
        // by a spawn land past the end of this range and first move on
        // the following frame.
        for i in (0..self.eyes.len()).rev() {
            self.eyes[i].update(&mut self.rng);

            if self.eyes[i].resolve_bounces() {
                self.palette.reroll(&mut self.rng);

                if i == 0 {
                    self.spawn_stamp();
                }
            }

            if i > 0 {
                let eye = &mut self.eyes[i];
                eye.diameter = lerp(eye.diameter, 0.0, DECAY_SMOOTHING);

                if eye.diameter < CULL_DIAMETER {
                    self.eyes.swap_remove(i);
                }
            }
        }

        self.prev_pointer = self.pointer;
    }

    fn drive_main_eye(&mut self) {
        let speed = self.pointer.dist(self.prev_pointer);

        if self.dragging {
            self.eyes[0].pos = self.pointer + self.drag_offset;

            if speed > FAST_DRAG_SPEED {
                self.eyes[0].diameter = lerp(self.eyes[0].diameter, MAX_DIAMETER, GROW_SMOOTHING);
                self.settle_started = None;
            } else if self.settle_started.is_none() {
                self.settle_started = Some(self.clock);
            }
        } else if self.settle_started.is_none() {
            self.settle_started = Some(self.clock);
        }

        // Shrinking back is independent of the press state.
        if let Some(started) = self.settle_started {
            if self.clock.saturating_sub(started) > SHRINK_DELAY {
                self.eyes[0].diameter = lerp(self.eyes[0].diameter, BASE_DIAMETER, GROW_SMOOTHING);
            }
        }

        self.eyes[0].diameter = self.eyes[0].diameter.clamp(BASE_DIAMETER, MAX_DIAMETER);
    }

    fn spawn_stamp(&mut self) {
        let diameter = self.eyes[0].diameter;
        let padding = diameter / 2.0;

        let pos = if self.size.x > padding * 2.0 && self.size.y > padding * 2.0 {
            Vec2::new(
                self.rng.gen_range(padding..self.size.x - padding),
                self.rng.gen_range(padding..self.size.y - padding),
            )
        } else {
            // Canvas too small to inset the stamp anywhere.
            self.size * 0.5
        };

        self.eyes.push(EyePair::new(pos, diameter));
    }

    /// Draw stamps oldest-on-top-of-nothing first, main eye last.
    pub fn render(&self, pix: &mut PixelBuffer) {
        pix.clear(self.palette.background);

        for (i, eye) in self.eyes.iter().enumerate().rev() {
            let radius = (eye.diameter / 2.0) as i32;
            let pupil_radius = (eye.pupil_diameter() / 2.0) as i32;

            if i == 0 {
                let stroke = map_range(
                    eye.diameter,
                    BASE_DIAMETER,
                    MAX_DIAMETER,
                    STROKE_MIN,
                    STROKE_MAX,
                ) as i32;

                let hovering = !self.dragging && eye.hit_test(self.pointer);
                let stroke_color = if hovering { HOVER_COLOR } else { color::BLACK };

                for socket in eye.socket_centers() {
                    draw::disc_outlined(
                        pix,
                        to_p2(socket),
                        radius,
                        stroke,
                        color::WHITE,
                        stroke_color,
                    );
                }
            } else {
                for socket in eye.socket_centers() {
                    draw::disc(pix, to_p2(socket), radius, color::WHITE);
                }
            }

            for pupil in &eye.pupils {
                draw::disc(pix, to_p2(pupil.pos), pupil_radius, self.palette.pupil);
            }
        }
    }
}

fn to_p2(v: Vec2) -> P2 {
    P2(v.x.round() as i32, v.y.round() as i32)
}
