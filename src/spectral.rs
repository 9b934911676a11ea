// external crates
use log::debug;
use rustfft::FftPlanner;
// local crates
use crate::buffers::{ComponentSeries, SampleRate, SpectrumData};
use crate::error::AnalysisError;
use crate::utils::{CFloat, Float};

/* SpectrumAnalyzer: one-sided discrete Fourier magnitude spectrum of a
 * single component series.
 *
 * Magnitudes are the raw transform output, never divided by the series
 * length, so they scale with L. Only the first L/2 bins are kept; the
 * mirrored upper half and the Nyquist bin are dropped, since only the
 * lower half carries distinct content for a real-valued input.
 *
 * The planner caches FFT setups, so reusing one analyzer across series
 * of the same length avoids re-planning.
 */
pub struct SpectrumAnalyzer {
    planner: FftPlanner<Float>,
}

impl SpectrumAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    pub fn analyze(
        &mut self,
        series: &ComponentSeries,
        fs: SampleRate,
    ) -> Result<SpectrumData, AnalysisError> {
        if !fs.is_finite() || fs <= 0.0 {
            return Err(AnalysisError::InvalidSamplingRate(fs));
        }

        let npt = series.len();
        let half = npt / 2;
        if half == 0 {
            // a 0- or 1-sample series has no resolvable frequency content
            return Ok(SpectrumData {
                fvals: vec![],
                mags: vec![],
            });
        }

        // copy integer samples into a complex fft buffer
        let mut buf: Vec<CFloat> = series
            .data()
            .iter()
            .map(|&x| CFloat::new(x as Float, 0.0))
            .collect();
        let fft = self.planner.plan_fft_forward(npt);
        fft.process(&mut buf);
        debug!("component {}: {} samples -> {} bins", series.index(), npt, half);

        let mags = buf[..half].iter().map(|z| z.norm()).collect();
        // half-open axis [0, fs/2): the Nyquist value itself is excluded
        let fstep = fs * 0.5 / half as Float;
        let fvals = (0..half).map(|k| k as Float * fstep).collect();

        Ok(SpectrumData { fvals, mags })
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
