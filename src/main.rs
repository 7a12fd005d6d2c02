use std::{
    error::Error,
    fs,
    io::{BufReader, Cursor, Write},
    sync::mpsc,
    thread,
};

use clap::{Parser, Subcommand};
use eframe::{
    egui::{vec2, ViewportBuilder},
    run_native,
};
use kitchen_timer::{
    communication::{AlarmSound, Message},
    config::Config,
    TimerApp,
};
use rodio::{decoder, OutputStream, Sink, Source};

static ALARM_WAV: &[u8] = include_bytes!("../assets/alarm.wav");

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print extra things
    #[clap(long, short)]
    debug: bool,
    /// Start counting down from this timeout (e.g. "1h30m") instead of asking
    #[clap(long, short)]
    timeout: Option<String>,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config and the built in alarm sound
    Init {
        #[clap(long, short)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the logger
    simple_file_logger::init_logger!("kitchen_timer").expect("couldn't initialize logger");

    let args = Args::parse();
    if let Some(Command::Init { force }) = args.command {
        if force && Config::is_config_present() || !Config::is_config_present() {
            Config::new().save(Config::config_path());
            // write the alarm sound (from the assets folder)
            fs::create_dir_all(Config::sounds_path())?;
            let mut alarm_file = fs::File::create(Config::sounds_path().join("alarm.wav"))?;
            alarm_file.write_all(ALARM_WAV)?;
            log::info!("wrote default config and alarm sound");
        }
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || alarm_loop(&rx));

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(vec2(340.0, 260.0)),
            ..Default::default()
        },
        ..Default::default()
    };
    // run the gui
    run_native(
        "Timer",
        native_options,
        Box::new(move |_| Ok(Box::new(TimerApp::new(tx, args.debug, args.timeout)))),
    )
    .map_err(|e| e.into())
}

/// owns the audio output; rings and stops the alarm as told over `rx`
fn alarm_loop(rx: &mpsc::Receiver<Message>) {
    let (_stream, stream_handle) =
        OutputStream::try_default().expect("couldn't open the default audio output");
    let mut alarm: Option<Sink> = None;
    while let Ok(message) = rx.recv() {
        match message {
            Message::AlarmTriggered { volume, sound } => {
                let sink = Sink::try_new(&stream_handle).expect("couldn't create an audio sink");
                sink.set_volume(volume / 100.0);
                match sound {
                    AlarmSound::Custom(path) => {
                        let source = fs::File::open(&path)
                            .map_err(|e| e.to_string())
                            .and_then(|file| {
                                decoder::Decoder::new(BufReader::new(file))
                                    .map_err(|e| e.to_string())
                            });
                        match source {
                            Ok(source) => sink.append(source.repeat_infinite()),
                            Err(e) => {
                                log::warn!(
                                    "couldn't play {}: {e}, using the built in alarm",
                                    path.display()
                                );
                                sink.append(bundled_alarm());
                            }
                        }
                    }
                    AlarmSound::Bundled => sink.append(bundled_alarm()),
                }
                sink.play();
                alarm = Some(sink);
            }
            Message::AlarmStopped => {
                if let Some(sink) = alarm.take() {
                    sink.stop();
                }
            }
        }
    }
}

fn bundled_alarm() -> rodio::source::Repeat<decoder::Decoder<Cursor<&'static [u8]>>> {
    decoder::Decoder::new(Cursor::new(ALARM_WAV))
        .expect("couldn't decode the built in alarm sound")
        .repeat_infinite()
}
