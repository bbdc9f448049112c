//! WAV file output for the encoded stereo stream.

use std::path::Path;

use anyhow::{Context, Result};
use skysweep_core::EncodedStereo;

/// Writes the encoded samples as an interleaved 16-bit PCM stereo WAV.
pub(crate) fn write_wav(encoded: &EncodedStereo, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: encoded.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("cannot create WAV file '{}'", path.display()))?;
    for &sample in &encoded.samples {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("cannot finalize WAV file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wav_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let encoded = EncodedStereo {
            samples: vec![100, -100, 2000, -2000, 32767, -32768],
            sample_rate: 8000,
        };
        write_wav(&encoded, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, encoded.samples);
    }
}
