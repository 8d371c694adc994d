// ── Sounds ──────────────────────────────────────────────────────────────────
//
// Three short procedural effects, each a fundsp graph (frequency ramp into
// an oscillator, multiplied by a gain envelope) rendered to a sample buffer
// and fired on a detached sink. The output stream lives as long as the
// game; dropping it silences everything.

use fundsp::hacker32::*;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, StreamError};

const SAMPLE_RATE: u32 = 44100;

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    /// Opens the default output device. A missing device is an init
    /// failure; there is no silent fallback.
    pub fn open() -> Result<Audio, StreamError> {
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(Audio { _stream, handle })
    }

    /// Short rising blip when ascent begins.
    pub fn flap(&self) {
        self.play(flap_samples());
    }

    /// Two-tone chime on a scored pipe pair.
    pub fn score(&self) {
        self.play(score_samples());
    }

    /// Falling saw sweep on the Running -> Over transition.
    pub fn death(&self) {
        self.play(death_samples());
    }

    fn play(&self, samples: Vec<f32>) {
        // A failed effect is not worth stopping the game over.
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        sink.detach();
    }
}

fn render(mut unit: impl AudioUnit, seconds: f64) -> Vec<f32> {
    unit.set_sample_rate(SAMPLE_RATE as f64);
    let frames = (SAMPLE_RATE as f64 * seconds) as usize;
    (0..frames).map(|_| unit.get_mono()).collect()
}

fn flap_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(250.0, 540.0, (t / 0.10).min(1.0)));
    let gain = lfo(|t: f32| 0.12 * (1.0 - t / 0.12).max(0.0));
    render((freq >> sine()) * gain, 0.12)
}

fn score_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| if t < 0.08 { 660.0 } else { 880.0 });
    let gain = lfo(|t: f32| 0.10 * (1.0 - t / 0.18).max(0.0));
    render((freq >> sine()) * gain, 0.18)
}

fn death_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
    let gain = lfo(|t: f32| 0.15 * (1.0 - t / 0.5).max(0.0));
    render((freq >> saw()) * gain, 0.5)
}
