#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

use std::{
    path::Path,
    sync::mpsc::Sender,
    time::{Duration, Instant},
};

use communication::{AlarmSound, Message};
use config::{Config, Theme};
use countdown::{AlarmCue, Countdown};
use eframe::egui::{
    self, Button, CentralPanel, Key, Layout, RichText, Slider, TopBottomPanel, ViewportCommand,
    Window,
};
use parse::{parse_time, ParseTimeError};

pub mod communication;
pub mod config;
pub mod countdown;
pub mod parse;

const TICK: Duration = Duration::from_secs(1);

enum Phase {
    /// waiting for the user to enter a timeout
    Entry {
        input: String,
        error: Option<ParseTimeError>,
    },
    Running {
        countdown: Countdown,
        next_tick: Instant,
        ringing: bool,
    },
}

impl Phase {
    fn running(timeout: chrono::Duration) -> Self {
        Self::Running {
            countdown: Countdown::new(timeout),
            next_tick: Instant::now() + TICK,
            ringing: false,
        }
    }
}

pub struct TimerApp {
    config: Config,
    sender: Sender<Message>,
    phase: Phase,
    in_config: bool,
    debug: bool,
}

impl TimerApp {
    #[must_use]
    pub fn new(sender: Sender<Message>, debug: bool, timeout: Option<String>) -> Self {
        // a timeout given on the command line skips the entry dialog; if it
        // doesn't parse, the dialog opens prefilled with it
        let phase = match timeout {
            Some(timeout) => match parse_time(&timeout) {
                Ok(timeout) => {
                    log::info!("starting countdown from the command line");
                    Phase::running(timeout)
                }
                Err(error) => Phase::Entry {
                    input: timeout,
                    error: Some(error),
                },
            },
            None => Phase::Entry {
                input: String::new(),
                error: None,
            },
        };
        Self {
            config: Config::load(Config::config_path()),
            sender,
            phase,
            in_config: false,
            debug,
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("title_and_ctrl").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let theme_btn = ui.add(Button::new({
                    if self.config.theme == Theme::Dark {
                        "🌞"
                    } else {
                        "🌙"
                    }
                }));
                if theme_btn.clicked() {
                    self.config.theme = !self.config.theme;
                    self.config.save(Config::config_path());
                }
                ui.with_layout(Layout::right_to_left(eframe::emath::Align::Min), |ui| {
                    if ui.button("⚙").on_hover_text("settings").clicked() {
                        self.in_config = true;
                    }
                    ui.centered_and_justified(|ui| {
                        ui.label("Timer");
                    });
                });
            });
        });
    }

    fn render_settings(&mut self, ctx: &egui::Context) {
        Window::new("settings ⚙").auto_sized().show(ctx, |ui| {
            if ui
                .add(
                    Slider::new(&mut self.config.volume, 0.0..=100.0)
                        .integer()
                        .suffix("%")
                        .text("volume"),
                )
                .changed()
            {
                self.config.save(Config::config_path());
            }
            match &self.config.alarm_sound {
                Some(path) => ui.label(format!("alarm sound: {}", path.display())),
                None => ui.label("alarm sound: built in"),
            };
            ui.horizontal(|ui| {
                if ui.button("Custom").clicked() {
                    let file_dialog = rfd::FileDialog::new().set_title("Pick alarm sound");
                    let file_dialog = match directories::UserDirs::new()
                        .and_then(|u| u.audio_dir().map(Path::to_path_buf))
                    {
                        Some(audio_path) => file_dialog.set_directory(audio_path),
                        None => file_dialog,
                    };
                    if let Some(path) = file_dialog.pick_file() {
                        self.config.alarm_sound = Some(path);
                        self.config.save(Config::config_path());
                    }
                }
                if ui.button("built in").clicked() {
                    self.config.alarm_sound = None;
                    self.config.save(Config::config_path());
                }
            });
            if ui.button("x").clicked() {
                self.in_config = false;
            }
        });
    }

    fn render_entry(&mut self, ctx: &egui::Context) {
        let Phase::Entry { input, error } = &mut self.phase else {
            return;
        };
        CentralPanel::default().show(ctx, |_| {});
        let mut confirmed = false;
        let mut cancelled = false;
        Window::new("Timer Timeout")
            .auto_sized()
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Enter timeout :");
                let entry = ui.text_edit_singleline(input);
                // enter confirms, same as clicking Ok
                if entry.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    confirmed = true;
                }
                if let Some(error) = error {
                    ui.colored_label(ui.visuals().error_fg_color, error.to_string());
                }
                ui.horizontal(|ui| {
                    if ui.button("Ok").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });
        if cancelled {
            log::info!("timeout entry cancelled");
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }
        if confirmed {
            if self.debug {
                println!("Time : {input}");
            }
            match parse_time(input) {
                Ok(timeout) => {
                    log::info!("starting countdown");
                    self.phase = Phase::running(timeout);
                }
                Err(e) => *error = Some(e),
            }
        }
    }

    fn render_countdown(&mut self, ctx: &egui::Context) {
        let Phase::Running {
            countdown,
            next_tick,
            ringing,
        } = &mut self.phase
        else {
            return;
        };
        // catch up on every tick that has come due since the last frame
        let now = Instant::now();
        while *next_tick <= now {
            *next_tick += TICK;
            let cue = countdown.tick();
            if self.debug {
                println!("Remaining time : {}", countdown.display());
            }
            Self::forward_cue(&self.sender, &self.config, ringing, cue);
        }

        TopBottomPanel::bottom("buttons").show(ctx, |ui| {
            ui.columns(3, |columns| {
                let size = [columns[0].available_width(), 24.0];
                if columns[0].add_sized(size, Button::new("Done")).clicked() {
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
                if columns[1].add_sized(size, Button::new("+1m")).clicked() {
                    let cue = countdown.add_minutes(1);
                    Self::forward_cue(&self.sender, &self.config, ringing, cue);
                }
                if columns[2].add_sized(size, Button::new("+5m")).clicked() {
                    let cue = countdown.add_minutes(5);
                    Self::forward_cue(&self.sender, &self.config, ringing, cue);
                }
            });
        });
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(countdown.display()).monospace().size(64.0));
            });
        });
        if *ringing {
            Window::new("Timer Elapsed").auto_sized().show(ctx, |ui| {
                ui.label("Timer has elapsed!");
                ui.horizontal(|ui| {
                    if ui.button("add 1m").clicked() {
                        let cue = countdown.add_minutes(1);
                        Self::forward_cue(&self.sender, &self.config, ringing, cue);
                    }
                    if ui.button("add 5m").clicked() {
                        let cue = countdown.add_minutes(5);
                        Self::forward_cue(&self.sender, &self.config, ringing, cue);
                    }
                });
            });
        }
        ctx.request_repaint_after(next_tick.saturating_duration_since(Instant::now()));
    }

    fn forward_cue(
        sender: &Sender<Message>,
        config: &Config,
        ringing: &mut bool,
        cue: Option<AlarmCue>,
    ) {
        match cue {
            Some(AlarmCue::Ring) => {
                log::info!("countdown elapsed, ringing alarm");
                *ringing = true;
                let sound = config
                    .alarm_sound
                    .clone()
                    .map_or(AlarmSound::Bundled, AlarmSound::Custom);
                sender
                    .send(Message::AlarmTriggered {
                        volume: config.volume,
                        sound,
                    })
                    .unwrap();
            }
            Some(AlarmCue::Silence) => {
                // stopping an alarm that isn't ringing is a no-op
                *ringing = false;
                sender.send(Message::AlarmStopped).unwrap();
            }
            None => {}
        }
    }
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.config.theme.into());
        self.render_header(ctx);
        if self.in_config {
            self.render_settings(ctx);
        }
        if matches!(self.phase, Phase::Entry { .. }) {
            self.render_entry(ctx);
        } else {
            self.render_countdown(ctx);
        }
    }
}
