use crate::data::*;
use crate::eyes::Scene;
use crate::{alert, error, info};

impl Program {
    pub fn eval_args(mut self, args: &mut dyn Iterator<Item = &String>) -> Self {
        let mut size = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let mut scale = DEFAULT_SCALE;
        let mut fps: Option<u32> = None;
        let mut seed: Option<u64> = None;

        let mut args = args.peekable();
        args.next();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiet" => self.quiet = true,

                "--size" => {
                    let s = args
                        .next()
                        .expect("Argument error: Expected value for size.")
                        .split('x')
                        .map(|x| x.parse::<u16>().expect("Argument error: Invalid value"))
                        .collect::<Vec<_>>();

                    if s.len() != 2 {
                        panic!("Argument error: Size must be given as WxH.");
                    }

                    size = (s[0].min(MAX_WIDTH), s[1].min(MAX_HEIGHT));
                }

                "--scale" => {
                    scale = args
                        .next()
                        .expect("Argument error: Expected u8 value for scale")
                        .parse::<u8>()
                        .expect("Argument error: Scale must be a positive integer");

                    if scale > MAX_SCALE_FACTOR {
                        panic!("Argument error: scale exceeds maximum allowed {MAX_SCALE_FACTOR}.");
                    }

                    if scale == 0 {
                        panic!("Argument error: scale needs to be larger than 0.");
                    }
                }

                "--fps" => {
                    let rate = args
                        .next()
                        .expect("Argument error: Expected value for refresh rate.")
                        .parse::<u32>()
                        .expect("Argument error: Invalid value.");

                    if rate == 0 {
                        panic!("Argument error: refresh rate needs to be larger than 0.");
                    }

                    fps = Some(rate);
                }

                "--seed" => {
                    let s = args
                        .next()
                        .expect("Argument error: Expected u64 value for seed.")
                        .parse::<u64>()
                        .expect("Argument error: Invalid value.");

                    seed = Some(s);
                }

                _ => error!("Argument error: Unknown option {}", arg),
            }
        }

        if self.quiet {
            super::log::set_log_enabled(false);
        }

        self.scale = scale;
        self.update_size(size);

        if let Some(rate) = fps {
            self.change_fps(rate);
        }

        // The scene is rebuilt so a given seed controls the whole
        // session, not just the part after the flag was parsed.
        self.scene = Scene::new(self.win_w as f32, self.win_h as f32, seed);

        self
    }

    pub fn print_startup_info(&self) {
        let mut string_out = String::new();

        string_out += "Welcome to googly!\n\
        Drag the eyes. Fling them hard. Any key resets, Escape quits.\n";

        string_out += "Startup configurations:\n";

        string_out += &format!("Refresh rate: {}hz\n", self.fps);
        string_out += &format!(
            "Canvas: {}x{} at scale {}\n",
            self.win_w, self.win_h, self.scale
        );

        info!("{}", string_out);

        {
            let w = self.win_w as u32 * self.scale as u32;
            let h = self.win_h as u32 * self.scale as u32;

            if w * h > 4_000_000 {
                alert!(
                    "\
                googly rasterizes on the CPU, it is not advised \
                to run it at a very large size.\
                "
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> Program {
        let args: Vec<String> = std::iter::once("googly")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();

        Program::new().eval_args(&mut args.iter())
    }

    #[test]
    fn defaults() {
        let prog = eval(&[]);
        assert_eq!(prog.size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(prog.scale(), DEFAULT_SCALE);
        assert_eq!(prog.fps(), DEFAULT_FPS);
    }

    #[test]
    fn parses_size_and_scale() {
        let prog = eval(&["--size", "320x240", "--scale", "2"]);
        assert_eq!(prog.size(), (320, 240));
        assert_eq!(prog.scale(), 2);
        assert_eq!(prog.pix.width(), 320);
        assert_eq!(prog.pix.height(), 240);
    }

    #[test]
    fn caps_oversized_canvas() {
        let prog = eval(&["--size", "9000x9000"]);
        assert_eq!(prog.size(), (MAX_WIDTH, MAX_HEIGHT));
    }

    #[test]
    fn parses_fps() {
        let prog = eval(&["--fps", "120"]);
        assert_eq!(prog.fps(), 120);
        assert_eq!(prog.refresh_rate(), std::time::Duration::from_micros(8333));
    }

    #[test]
    fn seed_makes_sessions_reproducible() {
        let mut a = eval(&["--seed", "11", "--size", "800x800"]);
        let mut b = eval(&["--seed", "11", "--size", "800x800"]);

        for prog in [&mut a, &mut b] {
            prog.scene.pointer_moved(crate::math::Vec2::new(370.0, 400.0));
            prog.scene.press();
            for _ in 0..50 {
                prog.scene.frame(std::time::Duration::from_millis(16));
            }
        }

        assert_eq!(a.scene.eyes()[0].pupils[0].pos, b.scene.eyes()[0].pupils[0].pos);
        assert_eq!(a.scene.palette(), b.scene.palette());
    }

    #[test]
    #[should_panic(expected = "Argument error")]
    fn malformed_size_panics() {
        eval(&["--size", "banana"]);
    }

    #[test]
    #[should_panic(expected = "Argument error")]
    fn zero_scale_panics() {
        eval(&["--scale", "0"]);
    }
}
