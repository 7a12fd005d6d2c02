use std::path::PathBuf;

/// which sound the audio thread should ring with
#[derive(Debug, Clone)]
pub enum AlarmSound {
    /// the alarm sound compiled into the binary
    Bundled,
    Custom(PathBuf),
}

#[derive(Debug, Clone)]
pub enum Message {
    AlarmTriggered { volume: f32, sound: AlarmSound },
    // the user added enough time to push the countdown back above zero
    AlarmStopped,
}
