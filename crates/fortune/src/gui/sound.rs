use fortune_core::audio::AudioCue;
use gtk::prelude::*;
use gtk4 as gtk;
use std::path::Path;

/// Spin sound backed by a GTK media stream. Playback errors are logged only.
pub struct MediaCue {
    media: gtk::MediaFile,
}

impl MediaCue {
    pub fn open(path: &Path) -> Option<Self> {
        if !path.exists() {
            log::warn!("Sound file {} not found, spinning silently", path.display());
            return None;
        }

        let media = gtk::MediaFile::for_filename(path);
        media.connect_error_notify(|m| {
            if let Some(e) = m.error() {
                log::warn!("Sound playback failed: {}", e);
            }
        });
        Some(Self { media })
    }
}

impl AudioCue for MediaCue {
    fn play(&self) {
        self.media.play();
    }

    fn pause(&self) {
        self.media.pause();
    }

    fn rewind(&self) {
        if self.media.is_seekable() {
            self.media.seek(0);
        }
    }
}
