//! Pac-Man chase entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_chase {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement};

    use pacman_chase::renderer::CanvasSurface;
    use pacman_chase::{Animator, ChaseError, ChaseSettings, FrameOutcome};

    const CANVAS_ID: &str = "pacman-ghost-canvas";
    const SECTION_SELECTOR: &str = ".pacman-ghost-section";

    /// Everything the browser callbacks share
    struct Chase {
        animator: Animator,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        /// Container the canvas is sized from
        section: Option<HtmlElement>,
    }

    impl Chase {
        /// Match the canvas backing store to its container
        fn fit_canvas(&mut self) -> (u32, u32) {
            let (w, h) = container_size(&self.canvas, self.section.as_ref());
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            (w, h)
        }
    }

    fn container_size(canvas: &HtmlCanvasElement, section: Option<&HtmlElement>) -> (u32, u32) {
        let (w, h) = match section {
            Some(section) => (section.offset_width(), section.offset_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        (w.max(0) as u32, h.max(0) as u32)
    }

    pub fn run() -> Result<(), ChaseError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Pac-Man chase starting...");

        let settings = ChaseSettings::load();
        if !settings.enabled {
            log::info!("Chase animation disabled in settings");
            return Ok(());
        }

        let window = web_sys::window().ok_or(ChaseError::NoWindow)?;
        let document = window.document().ok_or(ChaseError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| ChaseError::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| ChaseError::NotACanvas(CANVAS_ID.to_string()))?;

        let section = document
            .query_selector(SECTION_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if section.is_none() {
            log::warn!("No {} container, sizing from the canvas itself", SECTION_SELECTOR);
        }

        let (w, h) = container_size(&canvas, section.as_ref());
        canvas.set_width(w);
        canvas.set_height(h);
        log::info!("Chase canvas {}x{}", w, h);

        let chase = Chase {
            animator: Animator::new(w as f32, h as f32, settings),
            surface: CanvasSurface::new(&canvas)?,
            canvas,
            section,
        };

        let chase = Rc::new(RefCell::new(chase));
        setup_resize_handler(&window, chase.clone())?;

        // Start frame loop
        request_animation_frame(chase);

        log::info!("Pac-Man chase running!");
        Ok(())
    }

    fn setup_resize_handler(window: &web_sys::Window, chase: Rc<RefCell<Chase>>) -> Result<(), ChaseError> {
        // Resizing never cancels the in-flight frame
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut c = chase.borrow_mut();
            let (w, h) = c.fit_canvas();
            c.animator.resize(w as f32, h as f32);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(chase: Rc<RefCell<Chase>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(chase, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(chase: Rc<RefCell<Chase>>, time: f64) {
        let outcome = {
            let mut c = chase.borrow_mut();
            let Chase {
                animator, surface, ..
            } = &mut *c;
            animator.frame(time, surface)
        };

        // Only NextFrame requests another frame, so a finished scene has none pending
        match outcome {
            FrameOutcome::NextFrame => request_animation_frame(chase),
            FrameOutcome::RestartAfter(delay) => schedule_restart(chase, delay),
            FrameOutcome::Suspended => {}
        }
    }

    fn schedule_restart(chase: Rc<RefCell<Chase>>, delay: Duration) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::once(move || {
            chase.borrow_mut().animator.restart();
            request_animation_frame(chase);
        });
        let timeout_ms = delay.as_millis().min(i32::MAX as u128) as i32;
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout_ms,
        ) {
            log::error!("setTimeout failed, chase will not restart: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use pacman_chase::ChaseError;

    match wasm_chase::run() {
        Ok(()) => {}
        // Pages without the chase section simply don't get one
        Err(ChaseError::CanvasNotFound(id)) => log::info!("No #{} on this page", id),
        Err(e) => log::error!("Pac-Man chase failed to start: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pac-Man chase (native) starting...");
    log::info!("Native mode renders headlessly - build for wasm32 to see the canvas");

    if let Err(e) = headless::run(std::env::args().nth(1)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pacman_chase::consts::TARGET_FPS;
    use pacman_chase::error::Result;
    use pacman_chase::renderer::RecordingSurface;
    use pacman_chase::sim::GhostKind;
    use pacman_chase::{Animator, ChaseSettings, FrameOutcome};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 360.0;
    /// Give up on scenes that never finish (e.g. a stationary lead ghost)
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Run one complete scene and log a summary
    pub fn run(settings_path: Option<String>) -> Result<()> {
        let settings = match settings_path {
            Some(path) => {
                log::info!("Loading settings from {}", path);
                ChaseSettings::from_json(&std::fs::read_to_string(path)?)?
            }
            None => ChaseSettings::default(),
        };

        let mut animator = Animator::new(WIDTH, HEIGHT, settings);
        let mut surface = RecordingSurface::new();
        let frame_ms = 1000.0 / TARGET_FPS;

        let mut cube_frame = None;
        let mut frame = 0u64;
        let delay = loop {
            frame += 1;
            if frame > MAX_FRAMES {
                log::warn!("Scene still running after {} frames, stopping", MAX_FRAMES);
                return Ok(());
            }

            let outcome = animator.frame(frame as f64 * frame_ms, &mut surface);
            if cube_frame.is_none() && animator.state().cube.consumed {
                cube_frame = Some(frame);
            }
            match outcome {
                FrameOutcome::NextFrame => {}
                FrameOutcome::RestartAfter(delay) => break delay,
                FrameOutcome::Suspended => log::warn!("Frame {} skipped", frame),
            }
        };

        let state = animator.state();
        log::info!(
            "Cube eaten at frame {}, scene finished at frame {} ({:.1}s)",
            cube_frame.unwrap_or_default(),
            frame,
            frame as f64 / TARGET_FPS
        );
        log::info!(
            "Ghosts eaten: {}, shapes painted: {}, restart in {:.0}s",
            GhostKind::ALL.len() - state.ghosts.len(),
            surface.total_shapes,
            delay.as_secs_f32()
        );
        Ok(())
    }
}
