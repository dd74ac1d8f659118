use super::{Argb, PixelBuffer, P2};

pub fn plot(pix: &mut PixelBuffer, p: P2, c: Argb) {
    let (w, h) = (pix.width() as i32, pix.height() as i32);

    if p.0 < 0 || p.1 < 0 || p.0 >= w || p.1 >= h {
        return;
    }

    let i = p.1 as usize * pix.width() + p.0 as usize;
    pix.pixels_mut()[i] = c;
}

fn span(pix: &mut PixelBuffer, y: i32, xs: i32, xe: i32, c: Argb) {
    let (w, h) = (pix.width() as i32, pix.height() as i32);

    if y < 0 || y >= h {
        return;
    }

    let xs = xs.clamp(0, w) as usize;
    let xe = (xe + 1).clamp(0, w) as usize;

    let row = y as usize * pix.width();
    pix.pixels_mut()[row + xs..row + xe].fill(c);
}

/// Filled disc, drawn with the midpoint circle algorithm as symmetric
/// horizontal spans.
pub fn disc(pix: &mut PixelBuffer, center: P2, radius: i32, c: Argb) {
    if radius < 0 {
        return;
    }

    if radius == 0 {
        plot(pix, center, c);
        return;
    }

    let mut t1 = radius / 16;
    let mut x = radius;
    let mut y = 0;

    while x >= y {
        span(pix, center.1 + y, center.0 - x, center.0 + x, c);
        span(pix, center.1 - y, center.0 - x, center.0 + x, c);
        span(pix, center.1 + x, center.0 - y, center.0 + y, c);
        span(pix, center.1 - x, center.0 - y, center.0 + y, c);

        y += 1;
        t1 += y;
        let t2 = t1 - x;

        if t2 >= 0 {
            t1 = t2;
            x -= 1;
        }
    }
}

/// Disc with a stroked rim: a larger disc in the stroke color beneath a
/// smaller one in the fill color. The stroke straddles the nominal radius.
pub fn disc_outlined(
    pix: &mut PixelBuffer,
    center: P2,
    radius: i32,
    stroke: i32,
    fill: Argb,
    stroke_color: Argb,
) {
    let half = stroke / 2;
    disc(pix, center, radius + half, stroke_color);
    disc(pix, center, radius - half, fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_paints_center_and_cardinal_points() {
        let mut pix = PixelBuffer::new(21, 21);
        disc(&mut pix, P2(10, 10), 5, 7);

        let at = |x: usize, y: usize| pix.pixels()[y * 21 + x];
        assert_eq!(at(10, 10), 7);
        assert_eq!(at(15, 10), 7);
        assert_eq!(at(5, 10), 7);
        assert_eq!(at(10, 15), 7);
        assert_eq!(at(10, 5), 7);
        // Corner of the bounding box stays untouched.
        assert_eq!(at(5, 5), 0);
    }

    #[test]
    fn disc_clips_at_every_edge() {
        let mut pix = PixelBuffer::new(10, 10);
        disc(&mut pix, P2(-3, -3), 6, 1);
        disc(&mut pix, P2(12, 12), 6, 1);
        disc(&mut pix, P2(5, 5), 50, 1);
        assert!(pix.pixels().iter().all(|&p| p <= 1));
    }

    #[test]
    fn outlined_disc_has_stroke_ring() {
        let mut pix = PixelBuffer::new(41, 41);
        disc_outlined(&mut pix, P2(20, 20), 10, 4, 2, 3);

        let at = |x: usize, y: usize| pix.pixels()[y * 41 + x];
        assert_eq!(at(20, 20), 2, "fill color in the middle");
        assert_eq!(at(31, 20), 3, "stroke color on the rim");
        assert_eq!(at(35, 20), 0, "outside the stroke");
    }
}
