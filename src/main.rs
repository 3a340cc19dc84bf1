// What you SEE:
// • Left panel: your doodle, 3x size. Hold Left Mouse to paint ink.
// • Right Mouse anywhere clears the doodle.
// • Right panel: the generated preview (if a --preview file is given).
// • Every change is written to the output PNG. ESC or closing the window quits.

use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use doodle_pad::config::Config;
use doodle_pad::draw::Drawer;
use doodle_pad::error::Error;
use doodle_pad::session::{Flow, Session};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Config::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cfg: Config) -> Result<(), Error> {
    /* --- Session setup ---
       Seed image and config problems stop us here, before a window opens. */
    let mut session = Session::new(&cfg)?;
    info!(
        "Canvas {}x{} (scale {}, {} interps, {:?} tool) -> {}",
        cfg.width, cfg.height, cfg.scale, cfg.interps, cfg.tool, cfg.output.display()
    );

    let (ww, wh) = cfg.window_size();
    let mut drawer = Drawer::new("Doodle Pad", ww, wh)?;
    info!("Window {ww}x{wh}");
    let pacing = Duration::from_millis(cfg.frame_ms);

    /* ------------------------------ Main loop ------------------------------ */
    loop {
        /* 1) Drain every queued input, then render + export once if anything
           changed, so a flush never sees half a stroke. The flush also runs
           on the closing frame, so the last stroke always reaches the file. */
        if session.frame(drawer.poll_events())? == Flow::Terminate {
            break;
        }

        /* 2) Present, then wait out the rest of the frame. */
        drawer.present(session.screen())?;
        thread::sleep(pacing);
    }

    info!("Closed; final drawing at {}", cfg.output.display());
    Ok(())
}
