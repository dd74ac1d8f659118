mod data;
mod eyes;
mod graphics;
mod math;
mod window;

use data::Program;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let prog = Program::new().eval_args(&mut args.iter());

    window::winit_main(prog);
}
