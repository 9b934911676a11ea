use std::path::Path;
use std::str::FromStr;

use plotters::prelude::*;

use crate::buffers::{ComponentSeries, SpectrumData};
use crate::utils::Float;

/* Color themes carried over from the desktop tool this replaces: five
 * fixed palettes, one color per component slot. The set of names is
 * closed; anything else fails to parse.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    Default,
    Warm,
    Cool,
    Grayscale,
    Rainbow,
}

impl ColorTheme {
    pub fn palette(&self) -> [RGBColor; 4] {
        match self {
            ColorTheme::Default => [
                RGBColor(0x34, 0x98, 0xdb),
                RGBColor(0x2e, 0xcc, 0x71),
                RGBColor(0xe7, 0x4c, 0x3c),
                RGBColor(0x9b, 0x59, 0xb6),
            ],
            ColorTheme::Warm => [
                RGBColor(0xe7, 0x4c, 0x3c),
                RGBColor(0xf3, 0x9c, 0x12),
                RGBColor(0xf1, 0xc4, 0x0f),
                RGBColor(0xd3, 0x54, 0x00),
            ],
            ColorTheme::Cool => [
                RGBColor(0x34, 0x98, 0xdb),
                RGBColor(0x29, 0x80, 0xb9),
                RGBColor(0x1a, 0xbc, 0x9c),
                RGBColor(0x34, 0x98, 0xdb),
            ],
            ColorTheme::Grayscale => [
                RGBColor(0x2c, 0x3e, 0x50),
                RGBColor(0x7f, 0x8c, 0x8d),
                RGBColor(0xbd, 0xc3, 0xc7),
                RGBColor(0x34, 0x49, 0x5e),
            ],
            ColorTheme::Rainbow => [
                RGBColor(0xe7, 0x4c, 0x3c),
                RGBColor(0xf1, 0xc4, 0x0f),
                RGBColor(0x2e, 0xcc, 0x71),
                RGBColor(0x34, 0x98, 0xdb),
            ],
        }
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(ColorTheme::Default),
            "warm" => Ok(ColorTheme::Warm),
            "cool" => Ok(ColorTheme::Cool),
            "grayscale" => Ok(ColorTheme::Grayscale),
            "rainbow" => Ok(ColorTheme::Rainbow),
            other => Err(format!(
                "unknown color theme {:?} (expected default, warm, cool, grayscale or rainbow)",
                other
            )),
        }
    }
}

// per-panel pixel size of the output grid
const PANEL_WIDTH: u32 = 480;
const PANEL_HEIGHT: u32 = 360;

/* Render one column per component: time-domain waveform on top, the
 * one-sided magnitude spectrum below it. Output format follows the
 * file extension (png/jpeg/bmp).
 */
pub fn render_analysis(
    fname: &Path,
    results: &[(ComponentSeries, SpectrumData)],
    theme: ColorTheme,
) -> Result<(), Box<dyn std::error::Error>> {
    let ncols = results.len().max(1);
    let root = BitMapBackend::new(fname, (PANEL_WIDTH * ncols as u32, 2 * PANEL_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, ncols));
    let colors = theme.palette();

    for (i, (series, spectrum)) in results.iter().enumerate() {
        let color = colors[i % colors.len()];

        // time domain (top row)
        let (ymin, ymax) = sample_range(series);
        let mut chart = ChartBuilder::on(&panels[i])
            .caption(format!("Component {} Time Domain", i + 1), ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(36)
            .y_label_area_size(56)
            .build_cartesian_2d(0.0..series.len().max(1) as Float, ymin..ymax)?;
        chart
            .configure_mesh()
            .x_desc("Sample Points")
            .y_desc("Amplitude")
            .draw()?;
        chart.draw_series(LineSeries::new(
            series
                .data()
                .iter()
                .enumerate()
                .map(|(n, &x)| (n as Float, x as Float)),
            color.stroke_width(2),
        ))?;

        // frequency domain (bottom row)
        let fmax = spectrum
            .fvals
            .last()
            .copied()
            .filter(|&f| f > 0.0)
            .unwrap_or(1.0);
        let mmax = spectrum
            .mags
            .iter()
            .fold(0.0_f64, |a, &b| a.max(b));
        let ymax = if mmax > 0.0 { mmax * 1.1 } else { 1.0 };
        let mut chart = ChartBuilder::on(&panels[ncols + i])
            .caption(
                format!("Component {} Frequency Domain", i + 1),
                ("sans-serif", 18),
            )
            .margin(10)
            .x_label_area_size(36)
            .y_label_area_size(56)
            .build_cartesian_2d(0.0..fmax, 0.0..ymax)?;
        chart
            .configure_mesh()
            .x_desc("Frequency (Hz)")
            .y_desc("Amplitude")
            .draw()?;
        chart.draw_series(LineSeries::new(
            spectrum
                .fvals
                .iter()
                .zip(spectrum.mags.iter())
                .map(|(&f, &m)| (f, m)),
            color.stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

// y-axis limits for a time panel, padded when the signal is flat
fn sample_range(series: &ComponentSeries) -> (Float, Float) {
    let ymin = series
        .data()
        .iter()
        .fold(Float::INFINITY, |a, &b| a.min(b as Float));
    let ymax = series
        .data()
        .iter()
        .fold(Float::NEG_INFINITY, |a, &b| a.max(b as Float));
    if ymin.is_finite() && ymax.is_finite() && ymin < ymax {
        (ymin, ymax)
    } else if ymin.is_finite() {
        (ymin - 1.0, ymax + 1.0)
    } else {
        (-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_parse() {
        assert_eq!("default".parse::<ColorTheme>(), Ok(ColorTheme::Default));
        assert_eq!("Warm".parse::<ColorTheme>(), Ok(ColorTheme::Warm));
        assert_eq!("COOL".parse::<ColorTheme>(), Ok(ColorTheme::Cool));
        assert_eq!("grayscale".parse::<ColorTheme>(), Ok(ColorTheme::Grayscale));
        assert_eq!("rainbow".parse::<ColorTheme>(), Ok(ColorTheme::Rainbow));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!("pastel".parse::<ColorTheme>().is_err());
        assert!("".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_palettes_cover_max_components() {
        for theme in [
            ColorTheme::Default,
            ColorTheme::Warm,
            ColorTheme::Cool,
            ColorTheme::Grayscale,
            ColorTheme::Rainbow,
        ] {
            assert_eq!(theme.palette().len(), 4);
        }
        assert_eq!(
            ColorTheme::Default.palette()[0],
            RGBColor(0x34, 0x98, 0xdb)
        );
    }
}
