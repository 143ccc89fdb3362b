//! Looping background music.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use rodio::{Decoder, OutputStream, Sink, Source};
use sky_dodge::error::{GameError, Result};

pub struct Music {
    sink: Sink,
    // Must outlive the sink; dropping it silences the device.
    _stream: OutputStream,
}

impl Music {
    /// Open the default output device and start `path` on an endless loop.
    pub fn start(path: &Path) -> Result<Music> {
        let file = File::open(path).map_err(|source| GameError::AssetIo {
            path: path.to_path_buf(),
            source,
        })?;
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        let source = Decoder::new(BufReader::new(file))?;
        sink.append(source.repeat_infinite());
        info!("playing {} on loop", path.display());

        Ok(Music { sink, _stream: stream })
    }

    /// Stop playback and release the output device.
    pub fn stop(self) {
        self.sink.stop();
    }
}
