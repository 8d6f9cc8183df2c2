//! Decoder subprocess launcher.

use std::path::PathBuf;
use std::process::Stdio;

use milkbutton_domain::PlayList;
use tokio::process::Command;

use crate::infrastructure::ports::{AudioLauncher, LaunchError};

/// Launches an mpg123-compatible decoder: `<program> -f <volume> -q <files..>`.
///
/// The child is spawned and dropped; the runtime reaps it when it exits.
#[derive(Debug, Clone)]
pub struct DecoderLauncher {
    program: String,
}

impl DecoderLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one launch, without the program name.
    pub fn args(play_list: &PlayList<PathBuf>, volume: u32) -> Vec<String> {
        let mut args = vec!["-f".to_string(), volume.to_string(), "-q".to_string()];
        args.extend(
            play_list
                .entries()
                .iter()
                .map(|path| path.to_string_lossy().into_owned()),
        );
        args
    }
}

impl AudioLauncher for DecoderLauncher {
    fn launch(&self, play_list: &PlayList<PathBuf>, volume: u32) -> Result<(), LaunchError> {
        let child = Command::new(&self.program)
            .args(Self::args(play_list, volume))
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::info!(
            pid = ?child.id(),
            files = play_list.len(),
            volume,
            "Decoder launched"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_put_volume_before_files() {
        let list = PlayList::expand(
            &[PathBuf::from("/audio/a.mp3"), PathBuf::from("/audio/b.mp3")],
            2,
        );
        assert_eq!(
            DecoderLauncher::args(&list, 1000),
            vec![
                "-f",
                "1000",
                "-q",
                "/audio/a.mp3",
                "/audio/b.mp3",
                "/audio/a.mp3",
                "/audio/b.mp3"
            ]
        );
    }

    #[tokio::test]
    async fn missing_program_is_a_launch_error() {
        let launcher = DecoderLauncher::new("/nonexistent/milkbutton-decoder");
        let list = PlayList::expand(&[PathBuf::from("a.mp3")], 1);
        let result = launcher.launch(&list, 100);
        assert!(matches!(result, Err(LaunchError::Spawn { .. })));
    }
}
