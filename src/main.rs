//! Frog Crossing entry point
//!
//! Native builds play in the terminal. Logs go to stderr; redirect it
//! (`2>frog.log`) when raising `RUST_LOG`.
//!
//! The browser build expects a `<canvas id="game-board">` sized by CSS and
//! optionally an element with id `hud` for the score line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use frog_crossing::platform::{
        InputQueue, LocalStorage, MemoryStorage, Storage, SystemClock, command_for_key,
    };
    use frog_crossing::renderer::{CanvasRenderer, Renderer};
    use frog_crossing::{AfterGameOver, Game, GameOverNotifier, GameOverSummary, Settings};

    /// Leaves the final frame up until the player presses r
    struct ShowFinalScreen;

    impl GameOverNotifier for ShowFinalScreen {
        fn game_over(&mut self, summary: &GameOverSummary) -> AfterGameOver {
            log::info!(
                "Final score {} (best {})",
                summary.final_score,
                summary.high_score
            );
            AfterGameOver::Wait
        }
    }

    struct App {
        game: Game<SystemClock>,
        input: Rc<RefCell<InputQueue>>,
        renderer: CanvasRenderer,
        notifier: ShowFinalScreen,
    }

    fn open_storage() -> Box<dyn Storage> {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({}), high score kept for this session only", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Frog Crossing (web) starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-board")
            .ok_or_else(|| JsValue::from_str("no #game-board canvas"))?
            .dyn_into()?;

        let mut storage = open_storage();
        let settings = Settings::load_or_create(storage.as_mut());
        let renderer = CanvasRenderer::new(canvas, document.get_element_by_id("hud"))?;
        let game = Game::new(settings, renderer.board_width(), SystemClock::new(), storage);
        renderer.resize(game.state().grid.board_width);

        let input = Rc::new(RefCell::new(InputQueue::new()));
        listen_for_keys(&window, input.clone())?;

        let app = Rc::new(RefCell::new(App {
            game,
            input,
            renderer,
            notifier: ShowFinalScreen,
        }));
        request_animation_frame(app);
        Ok(())
    }

    fn listen_for_keys(window: &Window, input: Rc<RefCell<InputQueue>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            // Keep arrow keys from scrolling the page
            if command_for_key(&key).is_some() {
                event.prevent_default();
            }
            input.borrow_mut().push_key(&key);
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut app = app.borrow_mut();
            let App {
                game,
                input,
                renderer,
                notifier,
            } = &mut *app;
            let mut queue = input.borrow_mut();
            match game.step(&mut *queue, renderer, notifier) {
                Ok(keep_going) => keep_going,
                Err(e) => {
                    log::error!("Frame failed: {}", e);
                    false
                }
            }
        };

        if keep_going {
            request_animation_frame(app);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal_game {
    use std::io::{self, Stdout, stdout};
    use std::path::PathBuf;

    use crossterm::{cursor, execute, terminal};

    use frog_crossing::platform::{FileStorage, FixedRateScheduler, SystemClock, TerminalInput};
    use frog_crossing::renderer::{Renderer, TerminalRenderer};
    use frog_crossing::{AfterGameOver, Game, GameOverNotifier, GameOverSummary, Settings};

    /// Keeps the final screen up; the player answers with r or q
    struct WaitForKey;

    impl GameOverNotifier for WaitForKey {
        fn game_over(&mut self, summary: &GameOverSummary) -> AfterGameOver {
            log::info!(
                "Final score {} (best {})",
                summary.final_score,
                summary.high_score
            );
            AfterGameOver::Wait
        }
    }

    fn data_dir() -> PathBuf {
        std::env::var_os("FROG_CROSSING_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".frog-crossing"))
    }

    fn enter(out: &mut Stdout) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )
    }

    fn leave(out: &mut Stdout) -> io::Result<()> {
        execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    }

    pub fn run() -> io::Result<()> {
        let mut storage = FileStorage::new(data_dir());
        log::info!("Data directory {}", storage.dir().display());
        let settings = Settings::load_or_create(&mut storage);

        let mut renderer = TerminalRenderer::new(stdout(), settings.board_width);
        let mut scheduler = FixedRateScheduler::new(settings.frame_rate);
        let mut game = Game::new(
            settings,
            renderer.board_width(),
            SystemClock::new(),
            Box::new(storage),
        );

        let mut out = stdout();
        enter(&mut out)?;
        let result = game.run(
            &mut TerminalInput::new(),
            &mut scheduler,
            &mut renderer,
            &mut WaitForKey,
        );
        leave(&mut out)?;
        result?;

        println!(
            "Final score: {}   High score: {}",
            game.state().score,
            game.high_score()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    frog_crossing::platform::init_logging();
    log::info!("Frog Crossing (terminal) starting...");
    terminal_game::run()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    frog_crossing::platform::init_logging();
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser entry is wasm_main
}
