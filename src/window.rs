use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Icon, Theme, Window, WindowId},
};

use std::{
    num::NonZeroU32,
    sync::{
        atomic::{AtomicBool, Ordering::Relaxed},
        mpsc::{self, SyncSender},
    },
    thread,
};

use crate::data::{Program, MAX_HEIGHT, MAX_WIDTH};
use crate::graphics::{color, draw, PixelBuffer, P2};
use crate::{alert, error, info};

// Written by Occluded events, read by the redraw pacer thread.
static HIDDEN: AtomicBool = AtomicBool::new(false);

type WindowSurface = Surface<&'static Window, &'static Window>;

struct WindowState {
    pub prog: Program,
    pub window: Option<&'static Window>,
    pub surface: Option<WindowSurface>,
    pub exit_sender: Option<SyncSender<()>>,
    pub final_buffer_size: PhysicalSize<u32>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.prog.print_startup_info();

        let scale = self.prog.scale() as u32;
        let win_size = PhysicalSize::<u32>::new(
            self.prog.pix.width() as u32 * scale,
            self.prog.pix.height() as u32 * scale,
        );

        let window_attributes = Window::default_attributes()
            .with_title("googly")
            .with_inner_size(win_size)
            .with_transparent(false)
            .with_resizable(true)
            .with_theme(Some(Theme::Light))
            .with_window_icon(make_icon());

        // Since we are leaking the window into a static reference,
        // resumed() is not allowed to be called again as it would
        // cause a build up of leaked windows.
        match self.window {
            None => {
                self.window = Some(Box::leak(Box::new(
                    event_loop
                        .create_window(window_attributes)
                        .expect("Failed to create window"),
                )))
            }

            Some(_) => panic!("Resume being called the 2nd time!"),
        }

        let window = self
            .window
            .expect("Window unwraps to none. This error should never happen!");

        let size = window.inner_size();
        self.final_buffer_size = size;

        self.surface = {
            let context = Context::new(window).expect("Failed to create a softbuffer context");
            let mut surface =
                Surface::new(&context, window).expect("Failed to create a softbuffer surface");

            Self::resize_surface(&mut surface, size.width, size.height);

            Some(surface)
        };

        let (exit_send, exit_recv) = mpsc::sync_channel(1);
        self.exit_sender = Some(exit_send);

        let itvl = self.prog.refresh_rate();

        // Thread to control requesting redraws.
        let _ = thread::Builder::new().stack_size(1024).spawn(move || loop {
            if exit_recv.recv_timeout(itvl).is_ok() {
                break;
            }

            if !window.is_minimized().unwrap_or(false) && !HIDDEN.load(Relaxed) {
                window.request_redraw();
            }
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(_) => {
                if let Some(w) = self.window.as_ref() {
                    w.request_redraw()
                }
            }

            WindowEvent::Occluded(b) => {
                HIDDEN.store(b, Relaxed);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.prog.pointer_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } if button == MouseButton::Left => {
                match state {
                    ElementState::Pressed => self.prog.scene.press(),
                    ElementState::Released => self.prog.scene.release(),
                }
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some(surface) = self.surface.as_mut() else {
                    error!("googly is unable to resize the buffer!");
                    return;
                };

                let scale = self.prog.scale() as u16;

                let w = u16::min(MAX_WIDTH, width as u16);
                let h = u16::min(MAX_HEIGHT, height as u16);

                if w == MAX_WIDTH || h == MAX_HEIGHT {
                    alert!("You are hitting the resolution limit of googly!");
                }

                // The canvas resizes in place; the scene keeps its
                // entities.
                self.prog.update_size((w / scale, h / scale));

                let (w, h) = (w as u32, h as u32);

                self.final_buffer_size.width = w;
                self.final_buffer_size.height = h;

                Self::resize_surface(surface, w, h);

                if let Ok(mut buffer) = surface.buffer_mut() {
                    buffer.fill(0x0);
                }
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),

                    // Any other key resets the scene.
                    _ => {
                        self.prog.scene.reset();
                        info!("Scene reset.");
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };

                self.prog.frame();

                if let Some(Ok(mut buffer)) = self.surface.as_mut().map(|s| s.buffer_mut()) {
                    self.prog.pix.scale_to(
                        self.prog.scale() as usize,
                        &mut buffer,
                        Some(self.final_buffer_size.width as usize),
                    );

                    window.pre_present_notify();
                    if let Err(e) = buffer.present() {
                        error!("googly is failing to present buffers to the window: {e}.");
                    }
                }
            }

            _ => {}
        }
    }
}

impl WindowState {
    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) {
        surface
            .resize(
                NonZeroU32::new(w).expect("Surface width is zero"),
                NonZeroU32::new(h).expect("Surface height is zero"),
            )
            .expect("Failed to resize surface buffer");
    }
}

/// The window icon is a pair of googly eyes rasterized with the same
/// disc code the scene renders with. No image asset needed.
fn make_icon() -> Option<Icon> {
    const SIDE: usize = 64;

    let mut pix = PixelBuffer::new(SIDE, SIDE);
    pix.clear(0);

    draw::disc(&mut pix, P2(20, 32), 15, color::WHITE);
    draw::disc(&mut pix, P2(44, 32), 15, color::WHITE);
    draw::disc(&mut pix, P2(20, 39), 7, color::BLACK);
    draw::disc(&mut pix, P2(44, 39), 7, color::BLACK);

    let rgba: Vec<u8> = pix
        .pixels()
        .iter()
        .flat_map(|&c| {
            let [a, r, g, b] = color::decompose(c);
            [r, g, b, a]
        })
        .collect();

    Icon::from_rgba(rgba, SIDE as u32, SIDE as u32)
        .inspect_err(|_| error!("Failed to create window icon."))
        .ok()
}

pub fn winit_main(prog: Program) {
    let event_loop = EventLoop::new().expect("Failed to create the event loop");

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        exit_sender: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop
        .run_app(&mut state)
        .expect("Event loop error");

    if let Some(sender) = state.exit_sender.as_ref() {
        let _ = sender.send(());
    }
}
