//! Audio decoding for the transcription pipeline
//!
//! Uploads arrive as containerized audio (WAV, OGG, MP3, M4A). The
//! recognition loop probes many locales against the same clip, so the
//! upload is decoded exactly once into [`DecodedAudio`] and every
//! attempt reuses the canonical mono 16-bit WAV buffer built here.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::utils::error::GatewayError;

/// A decoded audio clip, normalized to mono 16-bit PCM
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    sample_rate: u32,
    samples: usize,
    wav: Vec<u8>,
}

impl DecodedAudio {
    /// Decode an uploaded clip into mono 16-bit PCM at its source rate
    pub fn decode(data: &[u8]) -> Result<Self, GatewayError> {
        if data.is_empty() {
            return Err(GatewayError::invalid_audio("empty audio upload"));
        }

        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let hint = Hint::new();
        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();
        let decoder_opts = DecoderOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &format_opts, &metadata_opts)
            .map_err(|e| GatewayError::invalid_audio(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| GatewayError::invalid_audio("no audio track found"))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| GatewayError::invalid_audio("unknown sample rate"))?;
        let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &decoder_opts)
            .map_err(|e| GatewayError::invalid_audio(format!("codec: {}", e)))?;

        let mut all_samples: Vec<i16> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(GatewayError::invalid_audio(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(GatewayError::invalid_audio(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }

            let mut sample_buf = SampleBuffer::<i16>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            let samples = sample_buf.samples();

            // Downmix to mono if multi-channel
            if channels > 1 {
                for frame in samples.chunks(channels) {
                    let mono = frame.iter().map(|&s| s as i32).sum::<i32>() / channels as i32;
                    all_samples.push(mono as i16);
                }
            } else {
                all_samples.extend_from_slice(samples);
            }
        }

        if all_samples.is_empty() {
            return Err(GatewayError::invalid_audio("no audio samples decoded"));
        }

        debug!(
            samples = all_samples.len(),
            sample_rate,
            duration_secs = all_samples.len() as f32 / sample_rate as f32,
            "Audio decoded to mono PCM"
        );

        let wav = encode_wav(&all_samples, sample_rate);
        Ok(Self {
            sample_rate,
            samples: all_samples.len(),
            wav,
        })
    }

    /// The canonical WAV rendition sent to the recognition engine
    pub fn wav_bytes(&self) -> &[u8] {
        &self.wav
    }

    /// Source sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Clip length in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples as f32 / self.sample_rate as f32
    }
}

/// Encode mono 16-bit PCM samples as a minimal RIFF/WAV buffer
fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut wav = Vec::with_capacity(44 + data_len as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}
