use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use zerog_common::{MouseButton, PointerEvent, PointerPhase};
use zerog_input::{InputEvent, InputSender};
use zerog_kernel::{FrameLoop, Simulation};
use zerog_render::{DebugTextRenderer, RenderView, Renderer};
use zerog_tools::SimInspector;

/// Frames between window title refreshes.
const TITLE_INTERVAL: u64 = 15;

#[derive(Parser)]
#[command(name = "zerog-desktop", about = "Zero-g station desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Window host. Translates winit events into queued input and runs one
/// simulation frame per redraw.
struct App {
    frame_loop: FrameLoop,
    input: InputSender,
    view: RenderView,
    renderer: DebugTextRenderer,
    window: Option<Arc<Window>>,
    cursor: (f32, f32),
    /// Touch id that owns the look drag; other fingers are ignored.
    active_touch: Option<u64>,
}

impl App {
    fn new(frame_loop: FrameLoop, input: InputSender) -> Self {
        Self {
            frame_loop,
            input,
            view: RenderView::default(),
            renderer: DebugTextRenderer::new(),
            window: None,
            cursor: (0.0, 0.0),
            active_touch: None,
        }
    }

    fn handle_touch(&mut self, touch: Touch) {
        let phase = touch_phase(touch.phase);
        match (self.active_touch, phase) {
            (None, PointerPhase::Start) => self.active_touch = Some(touch.id),
            (Some(id), _) if id == touch.id => {
                if phase == PointerPhase::End {
                    self.active_touch = None;
                }
            }
            _ => return,
        }
        let (x, y) = (touch.location.x as f32, touch.location.y as f32);
        self.input.pointer(PointerEvent::touch(phase, x, y));
    }

    fn redraw(&mut self) {
        let pose = self.frame_loop.frame();
        let sim = self.frame_loop.simulation();
        tracing::trace!("{}", self.renderer.render(&pose, &self.view));

        let Some(window) = &self.window else {
            return;
        };
        if sim.tick() % TITLE_INTERVAL == 0 {
            window.set_title(&format!("ZERO-G | {}", SimInspector::summary(sim)));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("ZERO-G")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.view = RenderView::with_viewport(size.width, size.height);
        self.window = Some(window);

        tracing::info!("window created at {}x{}", size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.view = RenderView::with_viewport(new_size.width, new_size.height);
            }
            WindowEvent::Focused(false) => {
                self.active_touch = None;
                self.input.send(InputEvent::FocusLost);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                self.input.key(key_code_name(key), key_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                let (x, y) = self.cursor;
                // Only moves during a mouse drag rotate; touch drags ignore hovering.
                let hover = PointerEvent::mouse(PointerPhase::Move, MouseButton::Primary, x, y);
                self.input.pointer(hover);
            }
            WindowEvent::CursorLeft { .. } => {
                let (x, y) = self.cursor;
                let left = PointerEvent::mouse(PointerPhase::End, MouseButton::Primary, x, y);
                self.input.pointer(left);
            }
            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let phase = match btn_state {
                    ElementState::Pressed => PointerPhase::Start,
                    ElementState::Released => PointerPhase::End,
                };
                let (x, y) = self.cursor;
                self.input.pointer(PointerEvent::mouse(phase, mouse_button(button), x, y));
            }
            WindowEvent::Touch(touch) => self.handle_touch(touch),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Binding name for a physical key, e.g. `KeyW` or `ShiftLeft`.
fn key_code_name(key: KeyCode) -> String {
    format!("{key:?}")
}

fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as Winit;
    match button {
        Winit::Left => MouseButton::Primary,
        Winit::Right => MouseButton::Secondary,
        Winit::Middle => MouseButton::Middle,
        Winit::Back => MouseButton::Other(3),
        Winit::Forward => MouseButton::Other(4),
        Winit::Other(code) => MouseButton::Other(code),
    }
}

fn touch_phase(phase: TouchPhase) -> PointerPhase {
    match phase {
        TouchPhase::Started => PointerPhase::Start,
        TouchPhase::Moved => PointerPhase::Move,
        TouchPhase::Ended | TouchPhase::Cancelled => PointerPhase::End,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("zerog-desktop starting");

    let config = zerog_config::load_or_default(cli.config.as_deref())?;
    let (frame_loop, input) = FrameLoop::new(Simulation::new(config.simulation), config.bindings);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(frame_loop, input);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerog_common::Intent;
    use zerog_input::KeyBindings;

    #[test]
    fn key_names_match_default_bindings() {
        let bindings = KeyBindings::default();
        for (key, intent) in [
            (KeyCode::KeyW, Intent::Forward),
            (KeyCode::ArrowDown, Intent::Backward),
            (KeyCode::KeyA, Intent::Left),
            (KeyCode::ArrowRight, Intent::Right),
            (KeyCode::Space, Intent::Up),
            (KeyCode::ShiftLeft, Intent::Down),
        ] {
            assert_eq!(bindings.resolve(&key_code_name(key)), Some(intent));
        }
    }

    #[test]
    fn only_left_button_is_primary() {
        assert_eq!(
            mouse_button(winit::event::MouseButton::Left),
            MouseButton::Primary
        );
        assert_eq!(
            mouse_button(winit::event::MouseButton::Right),
            MouseButton::Secondary
        );
        assert_eq!(
            mouse_button(winit::event::MouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }

    #[test]
    fn cancelled_touch_ends_the_drag() {
        assert_eq!(touch_phase(TouchPhase::Started), PointerPhase::Start);
        assert_eq!(touch_phase(TouchPhase::Moved), PointerPhase::Move);
        assert_eq!(touch_phase(TouchPhase::Cancelled), PointerPhase::End);
    }
}
