//! Input device discovery and the merged key-down stream.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use evdev::{Device, EventType, InputEvent};
use futures_util::stream::{self, Stream, StreamExt};

/// `EV_KEY` value for a press; 0 is release, 2 is autorepeat.
const KEY_DOWN: i32 = 1;

/// A key press, stamped when the loop read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDown {
    pub at: Instant,
}

/// Conditions that leave the listener with nothing to listen to.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Cannot enumerate input devices in {}: {source}", .dir.display())]
    Enumerate {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No input device with key events found in {}. Check permissions (e.g. add user to 'input' group).", .dir.display())]
    NoDevices { dir: PathBuf },
}

/// An opened key-capable device.
pub struct KeyDevice {
    pub path: PathBuf,
    device: Device,
}

impl KeyDevice {
    pub fn name(&self) -> &str {
        self.device.name().unwrap_or("unknown")
    }
}

/// `event*` node paths under `dir`, sorted.
pub fn device_nodes(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let entries = std::fs::read_dir(dir).map_err(|source| InputError::Enumerate {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut nodes: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("event"))
        .map(|entry| entry.path())
        .collect();
    nodes.sort();
    Ok(nodes)
}

/// Open every key-capable device under `dir`.
///
/// Devices that cannot be opened are skipped with a warning; finding none at
/// all is an error.
pub fn open_key_devices(dir: &Path) -> Result<Vec<KeyDevice>, InputError> {
    let mut devices = Vec::new();
    for path in device_nodes(dir)? {
        let device = match Device::open(&path) {
            Ok(device) => device,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping input device");
                continue;
            }
        };
        if !device.supported_events().contains(EventType::KEY) {
            tracing::debug!(path = %path.display(), "No key events, ignoring");
            continue;
        }
        let device = KeyDevice { path, device };
        tracing::info!(path = %device.path.display(), name = device.name(), "Listening on device");
        devices.push(device);
    }

    if devices.is_empty() {
        return Err(InputError::NoDevices {
            dir: dir.to_path_buf(),
        });
    }
    Ok(devices)
}

pub fn is_key_down(event: &InputEvent) -> bool {
    event.event_type() == EventType::KEY && event.value() == KEY_DOWN
}

/// One stream of key presses across all devices.
///
/// A device whose read fails drops out of the stream with a warning; the
/// stream ends when no device is left.
pub fn key_downs(devices: Vec<KeyDevice>) -> impl Stream<Item = KeyDown> + Unpin {
    let streams = devices.into_iter().filter_map(|KeyDevice { path, device }| {
        match device.into_event_stream() {
            Ok(events) => Some(device_key_downs(path, events).boxed_local()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read input device");
                None
            }
        }
    });
    stream::select_all(streams)
}

fn device_key_downs(
    path: PathBuf,
    events: evdev::EventStream,
) -> impl Stream<Item = KeyDown> {
    stream::unfold(Some((path, events)), |state| async move {
        let (path, mut events) = state?;
        loop {
            match events.next_event().await {
                Ok(event) if is_key_down(&event) => {
                    return Some((KeyDown { at: Instant::now() }, Some((path, events))));
                }
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Input device read failed");
                    return None;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdev::Key;
    use std::fs;

    #[test]
    fn key_down_only() {
        let enter = Key::KEY_ENTER.code();
        let down = InputEvent::new(EventType::KEY, enter, 1);
        let up = InputEvent::new(EventType::KEY, enter, 0);
        let repeat = InputEvent::new(EventType::KEY, enter, 2);
        let sync = InputEvent::new(EventType::SYNCHRONIZATION, 0, 1);

        assert!(is_key_down(&down));
        assert!(!is_key_down(&up));
        assert!(!is_key_down(&repeat));
        assert!(!is_key_down(&sync));
    }

    #[test]
    fn device_nodes_lists_event_entries_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["event3", "mice", "event0", "by-id-link", "event10"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let nodes: Vec<String> = device_nodes(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(nodes, vec!["event0", "event10", "event3"]);
    }

    #[test]
    fn missing_input_dir_cannot_be_enumerated() {
        let dir = tempfile::tempdir().unwrap();
        let err = device_nodes(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, InputError::Enumerate { .. }));
    }

    #[test]
    fn unopenable_devices_leave_nothing_to_listen_to() {
        let dir = tempfile::tempdir().unwrap();
        // plain files are not evdev nodes, so every open fails and is skipped
        fs::write(dir.path().join("event0"), b"").unwrap();
        fs::write(dir.path().join("event1"), b"").unwrap();

        let err = open_key_devices(dir.path()).err().unwrap();
        assert!(matches!(err, InputError::NoDevices { .. }));
    }
}
