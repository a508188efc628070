use clap::{Arg, ArgAction, Command};
use lds_view::backend::{create_backend, BackendKind, WindowOptions};
use lds_view::framebuffer::FrameBuffer;
use lds_view::{config, panel, ViewError};
use log::info;

struct PanelOptions {
    width: u32,
    height: u32,
    fullscreen: bool,
    maximize: bool,
}

fn parse_dimension(value: &str) -> u32 {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid window dimension \"{}\".", value);
        std::process::exit(1);
    })
}

/// Process command line arguments and environment variables. The help
/// flag is disabled because -h sets the window height.
fn parse_cli() -> PanelOptions {
    let command = Command::new("printer_panel")
        .about("Draws a static printer control screen.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("fullscreen")
                .short('f')
                .action(ArgAction::SetTrue)
                .help("Start fullscreen"),
        )
        .arg(
            Arg::new("maximize")
                .short('m')
                .action(ArgAction::SetTrue)
                .help("Start maximized"),
        )
        .arg(Arg::new("width").short('w').value_name("WIDTH"))
        .arg(Arg::new("height").short('h').value_name("HEIGHT"));

    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let (mut width, mut height) = config::window_size_from_env();
    if let Some(value) = matches.get_one::<String>("width") {
        width = parse_dimension(value);
    }
    if let Some(value) = matches.get_one::<String>("height") {
        height = parse_dimension(value);
    }

    PanelOptions {
        width,
        height,
        fullscreen: matches.get_flag("fullscreen"),
        maximize: matches.get_flag("maximize"),
    }
}

fn run(options: PanelOptions) -> Result<(), ViewError> {
    let kind = config::backend_from_env().unwrap_or_else(|| {
        eprintln!("Unknown display backend.");
        std::process::exit(1);
    });

    let mut backend = create_backend(
        kind,
        &WindowOptions {
            title: "Printer panel".to_string(),
            width: options.width,
            height: options.height,
            fullscreen: options.fullscreen,
            maximize: options.maximize,
        },
    )?;

    let mut fb = FrameBuffer::new(options.width, options.height);
    panel::draw_panel(&mut fb)?;
    info!("printer panel up");

    while backend.pump()? {
        backend.present(&fb)?;
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = parse_cli();
    if let Err(e) = run(options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
