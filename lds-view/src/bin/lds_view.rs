use clap::{Arg, Command};
use lds_view::backend::{create_backend, BackendKind, WindowOptions};
use lds_view::framebuffer::FrameBuffer;
use lds_view::{app, config, run_driver, ViewError};
use log::info;

fn parse_cli() -> (String, BackendKind) {
    let matches = Command::new("LDS scan viewer")
        .about("Reads frames from an LDS spinning LIDAR and draws a live polar plot.")
        .disable_version_flag(true)
        .arg(Arg::new("port").help("The device path to a serial port"))
        .arg(
            Arg::new("backend")
                .long("backend")
                .value_name("NAME")
                .help("Display backend: window or headless"),
        )
        .get_matches();

    let port_name = matches
        .get_one::<String>("port")
        .cloned()
        .or_else(|| std::env::var(config::SERIAL_PORT_ENV).ok())
        .unwrap_or_else(|| {
            eprintln!(
                "No serial port given. Pass it as an argument or set {}.",
                config::SERIAL_PORT_ENV
            );
            std::process::exit(1);
        });

    let kind = match matches.get_one::<String>("backend") {
        Some(name) => BackendKind::from_name(name),
        None => config::backend_from_env(),
    }
    .unwrap_or_else(|| {
        eprintln!("Unknown display backend.");
        std::process::exit(1);
    });

    (port_name, kind)
}

fn run() -> Result<(), ViewError> {
    let (port_name, kind) = parse_cli();
    let (width, height) = config::window_size_from_env();

    let options = WindowOptions {
        title: "LDS scan viewer".to_string(),
        width,
        height,
        fullscreen: false,
        maximize: false,
    };
    let mut backend = create_backend(kind, &options)?;
    let mut fb = FrameBuffer::new(width, height);

    info!("reading from {}", port_name);
    let (driver_threads, reading_rx) = run_driver(&port_name)?;
    info!("LDS viewer started");

    app::run(backend.as_mut(), &reading_rx, &mut fb)?;

    drop(driver_threads);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
