use crate::utils::{Float, Int};

pub type ComponentCount = usize;
pub type SampleRate = Float;

/* SampleBuffer: flat sequence of interleaved integer samples, as read
 * from a capture file. Data vector is owned by this object and never
 * mutated after construction.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    data: Vec<Int>,
}

impl SampleBuffer {
    // constructor
    pub fn new(data: Vec<Int>) -> Self {
        Self { data }
    }

    // reference to internal samples
    pub fn data(&self) -> &[Int] {
        &self.data
    }

    // total number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<Int>> for SampleBuffer {
    fn from(data: Vec<Int>) -> Self {
        Self::new(data)
    }
}

/* ComponentSeries: one recovered component stream, together with its
 * zero-based position in the interleave cycle.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSeries {
    index: usize,
    data: Vec<Int>,
}

impl ComponentSeries {
    pub(crate) fn new(index: usize, data: Vec<Int>) -> Self {
        Self { index, data }
    }

    // which interleave slot this series came from
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &[Int] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/* SpectrumData: one-sided magnitude spectrum of a single component.
 * fvals (hz) and mags always have equal length; both run from the DC
 * bin up to, but not including, the Nyquist frequency.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumData {
    pub fvals: Vec<Float>,
    pub mags: Vec<Float>,
}

impl SpectrumData {
    // number of frequency bins
    pub fn len(&self) -> usize {
        self.fvals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fvals.is_empty()
    }
}
