// std lib imports
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
// external crates
use byteorder::{LittleEndian, ReadBytesExt};
use itertools::Itertools;
use log::info;
// local crates
use crate::buffers::SampleBuffer;
use crate::error::AnalysisError;
use crate::utils::{Float, Int};

/* Capture file loading.
 *
 * .dat files hold consecutive 32-bit signed little-endian integers.
 * Everything else is treated as text: whitespace/newline separated
 * numeric values, truncated to i32 the way the capture tooling wrote
 * them.
 */
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<SampleBuffer, AnalysisError> {
    let path = path.as_ref();
    let is_binary = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dat"));

    let file = File::open(path)?;
    let data = if is_binary {
        read_binary(BufReader::new(file))?
    } else {
        let mut text = String::new();
        BufReader::new(file).read_to_string(&mut text)?;
        parse_text(&text)?
    };

    if data.is_empty() {
        return Err(AnalysisError::EmptyBuffer);
    }
    info!("loaded {} samples from {}", data.len(), path.display());
    Ok(SampleBuffer::new(data))
}

// consecutive i32 words; a trailing partial word is dropped
fn read_binary<R: Read>(mut reader: R) -> Result<Vec<Int>, AnalysisError> {
    let mut samples = Vec::new();
    loop {
        match reader.read_i32::<LittleEndian>() {
            Ok(sample) => samples.push(sample),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(samples)
}

// whitespace-separated values, truncated toward zero
fn parse_text(text: &str) -> Result<Vec<Int>, AnalysisError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<Float>()
                .map(|x| x as Int)
                .map_err(|_| AnalysisError::MalformedSample {
                    token: token.to_string(),
                })
        })
        .try_collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn tmp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sigview-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_binary_round_trip() {
        let path = tmp_path("roundtrip.dat");
        let samples: Vec<Int> = vec![0, -1, i32::MAX, i32::MIN, 42];
        {
            let mut file = fs::File::create(&path).unwrap();
            for &s in &samples {
                file.write_i32::<LittleEndian>(s).unwrap();
            }
        }
        let buf = load_samples(&path).unwrap();
        assert_eq!(buf.data(), &samples[..]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_binary_trailing_partial_word_dropped() {
        let path = tmp_path("trailing.dat");
        {
            let mut file = fs::File::create(&path).unwrap();
            file.write_i32::<LittleEndian>(7).unwrap();
            file.write_i32::<LittleEndian>(-9).unwrap();
            file.write_all(&[0xab, 0xcd]).unwrap(); // half a word
        }
        let buf = load_samples(&path).unwrap();
        assert_eq!(buf.data(), &[7, -9]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_text_parsing_truncates_toward_zero() {
        let path = tmp_path("values.txt");
        fs::write(&path, "1 -2 3.7\n-4.9\t500\n").unwrap();
        let buf = load_samples(&path).unwrap();
        assert_eq!(buf.data(), &[1, -2, 3, -4, 500]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_token_rejected() {
        let path = tmp_path("malformed.txt");
        fs::write(&path, "1 2 three 4").unwrap();
        let err = load_samples(&path).unwrap_err();
        match err {
            AnalysisError::MalformedSample { token } => assert_eq!(token, "three"),
            other => panic!("expected MalformedSample, got {:?}", other),
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_file_rejected() {
        for name in ["empty.dat", "empty.txt"] {
            let path = tmp_path(name);
            fs::write(&path, "").unwrap();
            assert!(matches!(
                load_samples(&path),
                Err(AnalysisError::EmptyBuffer)
            ));
            fs::remove_file(&path).ok();
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = load_samples(tmp_path("does-not-exist.dat"));
        assert!(matches!(res, Err(AnalysisError::Io(_))));
    }
}
