pub mod buffers;
pub mod demux;
pub mod error;
pub mod fileio;
pub mod plot;
pub mod spectral;
pub mod utils;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::buffers::{ComponentCount, ComponentSeries, SampleBuffer, SampleRate, SpectrumData};
use crate::demux::SampleDemultiplexer;
use crate::error::AnalysisError;
use crate::spectral::SpectrumAnalyzer;

// split a flat buffer and compute every component's spectrum.
// components share no state, so with the rayon feature each one is
// analyzed on its own worker with its own planner.
pub fn split_and_analyze(
    buffer: &SampleBuffer,
    count: ComponentCount,
    fs: SampleRate,
) -> Result<Vec<(ComponentSeries, SpectrumData)>, AnalysisError> {
    let series = SampleDemultiplexer::new().demultiplex(buffer, count)?;

    #[cfg(feature = "rayon")]
    let iter = series.into_par_iter();
    #[cfg(not(feature = "rayon"))]
    let iter = series.into_iter();

    iter.map(|s| {
        let spectrum = SpectrumAnalyzer::new().analyze(&s, fs)?;
        Ok((s, spectrum))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_shapes() {
        let buffer = SampleBuffer::new((0..11).collect());
        let results = split_and_analyze(&buffer, 3, 1000.0).unwrap();

        assert_eq!(results.len(), 3);
        for (i, (series, spectrum)) in results.iter().enumerate() {
            assert_eq!(series.index(), i);
            assert_eq!(spectrum.len(), series.len() / 2);
        }
        // ragged split: lengths 4, 4, 3 -> spectra 2, 2, 1
        assert_eq!(results[0].0.len(), 4);
        assert_eq!(results[1].0.len(), 4);
        assert_eq!(results[2].0.len(), 3);
    }

    #[test]
    fn test_pipeline_propagates_demux_errors() {
        let buffer = SampleBuffer::new(vec![]);
        assert!(matches!(
            split_and_analyze(&buffer, 2, 1000.0),
            Err(AnalysisError::EmptyBuffer)
        ));
        let buffer = SampleBuffer::new(vec![1, 2, 3]);
        assert!(matches!(
            split_and_analyze(&buffer, 9, 1000.0),
            Err(AnalysisError::InvalidComponentCount { .. })
        ));
    }

    #[test]
    fn test_pipeline_propagates_rate_errors() {
        let buffer = SampleBuffer::new((0..8).collect());
        assert!(matches!(
            split_and_analyze(&buffer, 2, 0.0),
            Err(AnalysisError::InvalidSamplingRate(_))
        ));
    }
}
