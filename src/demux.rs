// external crates
use log::debug;
// local crates
use crate::buffers::{ComponentCount, ComponentSeries, SampleBuffer};
use crate::error::AnalysisError;

// how many interleaved components a capture file may carry
pub const MAX_COMPONENTS: ComponentCount = 4;

/* SampleDemultiplexer: recovers round-robin interleaved component
 * streams from a single flat buffer.
 *
 * Component i receives the samples at buffer positions i, i+count,
 * i+2*count, ... up to the end of the buffer. When the buffer length is
 * not a multiple of the count, the trailing partial cycle leaves the
 * earliest-indexed components one sample longer; that asymmetry is kept
 * as-is rather than trimmed to uniform length.
 */
#[derive(Debug, Clone)]
pub struct SampleDemultiplexer {
    max_components: ComponentCount,
}

impl SampleDemultiplexer {
    pub fn new() -> Self {
        Self::with_bound(MAX_COMPONENTS)
    }

    // same splitter with a caller-chosen upper bound on the count
    pub fn with_bound(max_components: ComponentCount) -> Self {
        Self { max_components }
    }

    pub fn max_components(&self) -> ComponentCount {
        self.max_components
    }

    pub fn demultiplex(
        &self,
        buffer: &SampleBuffer,
        count: ComponentCount,
    ) -> Result<Vec<ComponentSeries>, AnalysisError> {
        if count < 1 || count > self.max_components {
            return Err(AnalysisError::InvalidComponentCount {
                count,
                max: self.max_components,
            });
        }
        if buffer.is_empty() {
            return Err(AnalysisError::EmptyBuffer);
        }

        debug!(
            "demultiplexing {} samples into {} components",
            buffer.len(),
            count
        );
        let series = (0..count)
            .map(|i| {
                let data = buffer
                    .data()
                    .iter()
                    .skip(i)
                    .step_by(count)
                    .copied()
                    .collect();
                ComponentSeries::new(i, data)
            })
            .collect();
        Ok(series)
    }
}

impl Default for SampleDemultiplexer {
    fn default() -> Self {
        Self::new()
    }
}
