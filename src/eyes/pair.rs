use rand::{rngs::SmallRng, Rng};

use super::*;
use crate::math::{map_range, Vec2};

#[derive(Clone, Copy, Debug)]
pub struct Pupil {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One pair of eyes. Index 0 of the scene's collection is the
/// interactive pair, every other pair is a decaying stamp; the entity
/// itself doesn't know which role it plays.
#[derive(Clone, Debug)]
pub struct EyePair {
    pub pos: Vec2,
    prev: Vec2,
    pub diameter: f32,
    pub pupils: [Pupil; 2],
}

impl EyePair {
    pub fn new(pos: Vec2, diameter: f32) -> Self {
        // Pupils start at the pair center and get pushed onto the
        // socket boundary by the first bounce resolution.
        let pupil = Pupil {
            pos,
            vel: Vec2::zero(),
        };

        Self {
            pos,
            prev: pos,
            diameter,
            pupils: [pupil; 2],
        }
    }

    pub fn socket_offset(&self) -> f32 {
        map_range(
            self.diameter,
            BASE_DIAMETER,
            MAX_DIAMETER,
            SOCKET_OFFSET_MIN,
            SOCKET_OFFSET_MAX,
        )
    }

    pub fn socket_centers(&self) -> [Vec2; 2] {
        let offset = Vec2::new(self.socket_offset(), 0.0);
        [self.pos - offset, self.pos + offset]
    }

    pub fn pupil_diameter(&self) -> f32 {
        self.diameter / 2.0
    }

    /// How far a pupil center may sit from its socket center.
    pub fn max_pupil_dist(&self) -> f32 {
        self.diameter / 2.0 - self.pupil_diameter() / 2.0
    }

    /// Advance pupil physics by one frame. The pair's own displacement
    /// since the previous frame kicks the pupils in the opposite
    /// direction, which is what makes dragging feel googly.
    pub fn update(&mut self, rng: &mut SmallRng) {
        let shift = self.pos - self.prev;

        for pupil in &mut self.pupils {
            pupil.vel -= shift * 0.5;
            pupil.vel.y += PUPIL_GRAVITY;
            pupil.vel.x += rng.gen_range(-JIGGLE_AMOUNT..JIGGLE_AMOUNT);
            pupil.vel.y += rng.gen_range(-JIGGLE_AMOUNT..JIGGLE_AMOUNT);
            pupil.vel *= PUPIL_FRICTION;
            pupil.pos += pupil.vel;
        }

        self.prev = self.pos;
    }

    /// Clamp both pupils onto their socket boundaries. Returns true if
    /// either pupil hit with an impact speed above HARD_BOUNCE_SPEED.
    pub fn resolve_bounces(&mut self) -> bool {
        let sockets = self.socket_centers();
        let max_dist = self.max_pupil_dist();
        let mut hard = false;

        for (pupil, socket) in self.pupils.iter_mut().zip(sockets) {
            let arm = pupil.pos - socket;

            if arm.mag() > max_dist {
                if pupil.vel.l1_norm() > HARD_BOUNCE_SPEED {
                    hard = true;
                }

                pupil.pos = socket + Vec2::from_angle(arm.angle()) * max_dist;
                pupil.vel *= BOUNCE_FACTOR;
            }
        }

        hard
    }

    /// True when `p` falls inside either socket circle.
    pub fn hit_test(&self, p: Vec2) -> bool {
        let radius = self.diameter / 2.0;
        self.socket_centers().iter().any(|&s| s.dist(p) < radius)
    }
}
