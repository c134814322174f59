
#[macro_use]
extern crate tracing;

use blockfield::{
    app::App,
    input::{Button, InputFrame},
    logging::init_logging,
    scene::Scene,
    settings::{Settings, SETTINGS_FILE_NAME},
};
use std::env::args;
use vek::*;


const CLI_INTRO: &'static str = r#"This is blockfield.

A headless block-world game core. Hook up a renderer and an input device
to play it for real; run it bare for a scripted demo session."#;

const CLI_HELP: &'static str = r#"
Examples:

    [this command]
    Run the scripted demo session with a random seed.

    [this command] --seed=12345
    Run the scripted demo session on a specific world.

Env var examples:
    RUST_LOG=blockfield=trace
    Changes logging levels"#;

/// Frames of walking forward in the scripted demo.
const DEMO_WALK_FRAMES: u32 = 120;


fn main() {
    println!("{}", CLI_INTRO);
    init_logging();

    let args = args().collect::<Vec<_>>();
    if args.get(1).map(String::as_str) == Some("--help") {
        println!("{}", CLI_HELP);
    } else {
        let seed = args.iter()
            .find_map(|arg| arg.strip_prefix("--seed="))
            .map(|s| s.parse().unwrap_or_else(|e| {
                error!(%e, "bad --seed value, using 0");
                0
            }));
        run_demo(seed);
    }
}

/// Drive the app through a fixed session: title, main menu, a stretch of
/// walking and jumping in the field, pause, quit to title, quit.
fn run_demo(seed: Option<u64>) {
    let settings = Settings::read(SETTINGS_FILE_NAME);
    let mut app = match seed {
        Some(seed) => App::new_in_field(seed, settings),
        None => {
            // walk in through the front door
            let app = App::new(settings);
            let app = step(app, InputFrame::default().with(Button::Start));
            step(app, InputFrame::default().with(Button::MenuConfirm))
        }
    };

    for i in 0..DEMO_WALK_FRAMES {
        let mut input = InputFrame {
            move_stick: Vec2::new(0, 100),
            look_stick: Vec2::new(25, 0),
            ..InputFrame::default()
        };
        if i % 40 == 0 {
            input = input.with(Button::Jump);
        }
        if i % 30 == 15 {
            input = input.with(Button::Break);
        }
        app = step(app, input);
        if let Scene::Field(view) = app.draw() {
            trace!(eye = ?view.eye, yaw = %view.yaw, "demo frame");
        }
    }

    if let Scene::Field(view) = app.draw() {
        info!(eye = ?view.eye, yaw = %view.yaw, pitch = %view.pitch, "demo walk finished");
    }

    // pause, quit the world, then quit from the main menu
    let app = step(app, InputFrame::default().with(Button::Start));
    let app = step(app, InputFrame::default().with(Button::MenuDown));
    let app = step(app, InputFrame::default().with(Button::MenuConfirm));
    let app = step(app, InputFrame::default().with(Button::Start));
    let app = step(app, InputFrame::default().with(Button::MenuDown));
    let quit = app.frame(&InputFrame::default().with(Button::MenuConfirm));
    debug_assert!(quit.is_none());
    info!("demo session over");
}

fn step(app: App, input: InputFrame) -> App {
    match app.frame(&input) {
        Some(app) => app,
        None => {
            error!("app quit mid-demo");
            std::process::exit(1);
        }
    }
}
