use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use log::{debug, info, warn};

use crate::error::{Error, Result};

/// An `ffmpeg` child process fed raw RGBA frames on stdin and encoding
/// them to H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    width: usize,
    height: usize,
    frames: u64,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(|e| Error::Recorder(format!("Failed to start ffmpeg: {}", e)))?;
        let stdin = process
            .stdin
            .take()
            .ok_or_else(|| Error::Recorder("Failed to open ffmpeg stdin".to_string()))?;

        info!("Encoding {}x{} @ {} fps to {}", width, height, fps, output.display());
        Ok(Ffmpeg {
            process,
            stdin: Some(stdin),
            width: width as usize,
            height: height as usize,
            frames: 0,
        })
    }

    /// Writes one bottom-up RGBA frame, as read back from a render texture.
    pub fn write_frame(&mut self, pixels: &[u8]) -> Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| Error::Recorder("ffmpeg stdin already closed".to_string()))?;
        write_flipped(stdin, pixels, self.width, self.height)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Closes the pipe and waits for ffmpeg to finish the file.
    pub fn finish(mut self) -> Result<()> {
        self.stdin = None;
        let status = self.process.wait()?;
        if !status.success() {
            return Err(Error::Recorder(format!("ffmpeg exited with {}", status)));
        }
        info!("Wrote {} frames", self.frames);
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Only reached without finish() when export bailed out early
        if self.stdin.take().is_some() {
            debug!("Closing ffmpeg pipe after {} frames", self.frames);
            if let Err(e) = self.process.wait() {
                warn!("Failed to wait for ffmpeg: {}", e);
            }
        }
    }
}

/// Number of identical frames that keep a slide on screen for `seconds`.
/// Never less than one.
pub fn frames_for(seconds: f32, fps: u32) -> u64 {
    ((seconds * fps as f32).round() as u64).max(1)
}

/// Writes an RGBA image row by row, last row first.
///
/// GPU read-back hands rows bottom to top while ffmpeg expects them top to
/// bottom.
pub fn write_flipped<W: Write>(sink: &mut W, pixels: &[u8], width: usize, height: usize) -> Result<()> {
    let stride = width * 4; // 4 bytes per pixel (RGBA)
    if pixels.len() < stride * height {
        return Err(Error::Recorder(format!(
            "Frame holds {} bytes, expected {} for {}x{}",
            pixels.len(),
            stride * height,
            width,
            height
        )));
    }
    for row in pixels[..stride * height].chunks_exact(stride).rev() {
        sink.write_all(row)?;
    }
    Ok(())
}
