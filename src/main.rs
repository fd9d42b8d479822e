//! Canvas Balls entry point
//!
//! The host owns the frame loop. On the web, `requestAnimationFrame` drives
//! one `Simulation::step` per repaint. Natively there is no window, so the
//! simulation runs headless for a fixed number of frames.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use canvas_balls::render::CanvasSurface;
    use canvas_balls::{SimConfig, Simulation};

    /// Canvas element the balls are drawn into
    const CANVAS_ID: &str = "game-canvas";

    struct App {
        sim: Simulation,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Balls starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = SimConfig::load();
        let (width, height) = config.canvas_size();
        let surface = CanvasSurface::new(&canvas, width, height).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let mut sim = match Simulation::new(config, seed) {
            Ok(sim) => sim,
            Err(e) => {
                log::error!("Bad config: {}", e);
                return;
            }
        };
        if let Err(e) = sim.initialize() {
            log::error!("Initialization failed: {}", e);
            return;
        }

        log::info!("Simulation initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App { sim, surface }));
        request_animation_frame(app);

        log::info!("Canvas Balls running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { sim, surface } = &mut *guard;
            sim.step(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Balls (native) starting...");
    log::info!("No window on native - run with `trunk serve` for the canvas version");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use canvas_balls::{RecordingSurface, Result, SimConfig, Simulation};

    /// Frames to simulate (ten seconds at 60 Hz)
    const FRAMES: u64 = 600;
    /// Log a summary every this many frames
    const REPORT_EVERY: u64 = 60;

    pub fn run() -> Result<()> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        let mut sim = Simulation::new(SimConfig::load(), seed)?;
        sim.initialize()?;

        let mut surface = RecordingSurface::new();
        let initial_energy = sim.kinetic_energy();
        log::info!("Initial kinetic energy: {:.2}", initial_energy);

        for _ in 0..FRAMES {
            sim.step(&mut surface);
            let drawn = surface.take().len();
            log::trace!("Frame {} issued {} draw commands", sim.frame(), drawn);

            if sim.frame() % REPORT_EVERY == 0 {
                let stats = sim.last_frame_stats();
                log::info!(
                    "Frame {}: energy={:.2} momentum={} bounces={} pulled={} collisions={}",
                    sim.frame(),
                    sim.kinetic_energy(),
                    sim.momentum(),
                    stats.wall_bounces,
                    stats.pulled_inside,
                    stats.collisions
                );
            }
        }

        let drift = sim.kinetic_energy() - initial_energy;
        log::info!("Done after {} frames, energy drift {:+.4}", sim.frame(), drift);
        Ok(())
    }
}
