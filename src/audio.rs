//! Sound effects
//!
//! Each simulation event maps to a short chip-tune blip described as plain
//! data. On the web those blips are synthesized with Web Audio oscillators -
//! no sound files needed.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Sawtooth,
}

/// One enveloped oscillator note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub freq: f32,
    /// Seconds from attack to silence
    pub duration: f32,
    pub waveform: Waveform,
    /// Peak gain before volume scaling
    pub gain: f32,
    /// Seconds after the effect is triggered
    pub delay: f32,
}

const fn tone(freq: f32, duration_ms: f32, waveform: Waveform, gain: f32, delay_ms: f32) -> Tone {
    Tone {
        freq,
        duration: duration_ms / 1000.0,
        waveform,
        gain,
        delay: delay_ms / 1000.0,
    }
}

const START: [Tone; 2] = [
    tone(880.0, 80.0, Waveform::Square, 0.05, 0.0),
    tone(1174.0, 80.0, Waveform::Square, 0.04, 40.0),
];
const JUMP: [Tone; 1] = [tone(660.0, 55.0, Waveform::Square, 0.045, 0.0)];
const LAND: [Tone; 1] = [tone(260.0, 40.0, Waveform::Triangle, 0.03, 0.0)];
const COLLECT: [Tone; 1] = [tone(1046.0, 45.0, Waveform::Square, 0.05, 0.0)];
const CRASH: [Tone; 2] = [
    tone(180.0, 140.0, Waveform::Sawtooth, 0.07, 0.0),
    tone(120.0, 160.0, Waveform::Sawtooth, 0.06, 70.0),
];

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Run started - two-note chord
    Start,
    Jump,
    Land,
    /// Flag grabbed
    Collect,
    /// Descending buzz
    Crash,
}

impl SoundEffect {
    /// The effect for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::RunStarted => Some(SoundEffect::Start),
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Land => Some(SoundEffect::Land),
            GameEvent::Collect => Some(SoundEffect::Collect),
            GameEvent::Crash => Some(SoundEffect::Crash),
            GameEvent::NewBest(_) => None,
        }
    }

    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundEffect::Start => &START,
            SoundEffect::Jump => &JUMP,
            SoundEffect::Land => &LAND,
            SoundEffect::Collect => &COLLECT,
            SoundEffect::Crash => &CRASH,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, Tone, Waveform};
    use crate::platform::EventSink;
    use crate::settings::Settings;
    use crate::sim::GameEvent;

    /// Plays sound effects through Web Audio
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Pick up volume/mute changes
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            for tone in effect.tones() {
                self.play_tone(ctx, tone);
            }
        }

        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, ctx: &AudioContext, tone: &Tone) {
            let osc_type = match tone.waveform {
                Waveform::Square => OscillatorType::Square,
                Waveform::Triangle => OscillatorType::Triangle,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
            };
            let Some((osc, gain)) = self.create_osc(ctx, tone.freq, osc_type) else {
                return;
            };
            let t0 = ctx.current_time() + f64::from(tone.delay);
            let end = t0 + f64::from(tone.duration);

            gain.gain().set_value_at_time(tone.gain * self.volume, t0).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.0001, end).ok();
            osc.start_with_when(t0).ok();
            osc.stop_with_when(end).ok();
        }
    }

    impl EventSink for AudioManager {
        fn handle(&mut self, event: &GameEvent) {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_audible_event_has_tones() {
        let events = [
            GameEvent::RunStarted,
            GameEvent::Jump,
            GameEvent::Land,
            GameEvent::Collect,
            GameEvent::Crash,
        ];
        for event in &events {
            let effect = SoundEffect::for_event(event).unwrap();
            assert!(!effect.tones().is_empty());
        }
        assert_eq!(SoundEffect::for_event(&GameEvent::NewBest(10)), None);
    }

    #[test]
    fn test_crash_is_a_two_tone_buzz() {
        let tones = SoundEffect::Crash.tones();
        assert_eq!(tones.len(), 2);
        assert!(tones.iter().all(|t| t.waveform == Waveform::Sawtooth));
        assert!(tones[1].freq < tones[0].freq);
        assert!((tones[1].delay + tones[1].duration - 0.23).abs() < 1e-6);
    }

    #[test]
    fn test_jump_blip() {
        let tone = SoundEffect::Jump.tones()[0];
        assert_eq!(tone.freq, 660.0);
        assert!((tone.duration - 0.055).abs() < 1e-6);
        assert_eq!(tone.delay, 0.0);
    }
}
