//! Value objects for the playback pipeline.

mod audio_file;
mod play_list;
mod player_config;
mod sender_config;

pub use audio_file::AudioFileName;
pub use play_list::PlayList;
pub use player_config::{
    PlayerConfig, PlayerConfigPatch, DELAY_MAX, DELAY_MIN, REPEATS_MAX, REPEATS_MIN, VOLUME_MAX,
    VOLUME_MIN,
};
pub use sender_config::SenderConfig;
