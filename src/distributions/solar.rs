//! Photon-flux wavelength distribution of the AM1.5 reference solar spectrum.
use super::{normalize, save_json};
use crate::{
    error::{MeResult, MothEyeError},
    plottable::CurvePlot,
};
use csv::ReaderBuilder;
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs::File, io::Read, path::Path};
use strum::EnumIter;

/// Planck constant in J s.
pub const PLANCK_CONSTANT: f64 = 6.626e-34;
/// Speed of light in vacuum in m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Name of the generated spectral distribution document.
pub const SOLAR_DISTRIBUTION_NAME: &str = "AM1.5G Solar Spectrum Probability Distribution";
/// Default file name of the generated spectral distribution document.
pub const SOLAR_DISTRIBUTION_FILE_NAME: &str = "AM15_spectrum.json";

/// Number of leading lines (title and column header) of an ASTM G173 table.
const NR_OF_HEADER_LINES: usize = 2;

/// Irradiance column of the ASTM G173 reference spectra.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SolarColumn {
    /// Extraterrestrial radiation (AM0)
    Extraterrestrial,
    /// Global tilt (AM1.5G)
    GlobalTilt,
    /// Direct and circumsolar radiation (AM1.5D)
    #[default]
    DirectCircumsolar,
}
impl SolarColumn {
    const fn csv_index(self) -> usize {
        match self {
            Self::Extraterrestrial => 1,
            Self::GlobalTilt => 2,
            Self::DirectCircumsolar => 3,
        }
    }
}
impl Display for SolarColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extraterrestrial => write!(f, "extraterrestrial"),
            Self::GlobalTilt => write!(f, "global tilt"),
            Self::DirectCircumsolar => write!(f, "direct + circumsolar"),
        }
    }
}

/// Tabulated solar spectral irradiance.
///
/// Wavelengths are stored in nm, the irradiance in W m⁻² nm⁻¹.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSpectrum {
    wavelengths: Vec<f64>,
    irradiance: Vec<f64>,
    column: SolarColumn,
}
impl SolarSpectrum {
    /// Read the given irradiance column of an ASTM G173 CSV file.
    ///
    /// The file consists of a title line, a header line and rows of the form
    /// `wavelength, extraterrestrial, global tilt, direct + circumsolar`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the file cannot be opened.
    ///   - a value cannot be parsed.
    ///   - the file contains less than two data rows.
    pub fn from_csv(path: &Path, column: SolarColumn) -> MeResult<Self> {
        let file = File::open(path).map_err(|e| {
            MothEyeError::Io(format!("cannot open file {}: {e}", path.display()))
        })?;
        info!("reading solar spectrum from {}", path.display());
        Self::from_reader(file, column)
    }
    /// Read the given irradiance column of ASTM G173 CSV data.
    ///
    /// # Errors
    ///
    /// This function will return an error if a value cannot be parsed or the data contains less
    /// than two rows.
    pub fn from_reader<R: Read>(reader: R, column: SolarColumn) -> MeResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut wavelengths = Vec::new();
        let mut irradiance = Vec::new();
        for (line, record) in reader.records().enumerate().skip(NR_OF_HEADER_LINES) {
            let record = record.map_err(|e| MothEyeError::Spectrum(e.to_string()))?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            wavelengths.push(parse_field(&record, 0, line)?);
            irradiance.push(parse_field(&record, column.csv_index(), line)?);
        }
        if wavelengths.len() < 2 {
            return Err(MothEyeError::Spectrum(
                "solar spectrum must contain at least two data rows".into(),
            ));
        }
        debug!("read {} spectral values", wavelengths.len());
        Ok(Self {
            wavelengths,
            irradiance,
            column,
        })
    }
    /// Returns the wavelengths in nm.
    #[must_use]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }
    /// Returns the spectral irradiance in W m⁻² nm⁻¹.
    #[must_use]
    pub fn irradiance(&self) -> &[f64] {
        &self.irradiance
    }
    /// Returns the irradiance column this spectrum was read from.
    #[must_use]
    pub const fn column(&self) -> SolarColumn {
        self.column
    }
    /// Returns the spectral photon flux (photons s⁻¹ m⁻² nm⁻¹).
    ///
    /// Each irradiance value is divided by the photon energy `h c / λ`.
    #[must_use]
    pub fn photon_flux(&self) -> Vec<f64> {
        self.wavelengths
            .iter()
            .zip(&self.irradiance)
            .map(|(lambda, e)| e / (PLANCK_CONSTANT * SPEED_OF_LIGHT / (lambda * 1.0e-9)))
            .collect()
    }
    /// Returns the bin width of each wavelength.
    ///
    /// Forward differences are used, the last bin repeats the width of the previous one.
    #[must_use]
    pub fn bin_widths(&self) -> Vec<f64> {
        let mut widths: Vec<f64> = self
            .wavelengths
            .iter()
            .tuple_windows()
            .map(|(l1, l2)| l2 - l1)
            .collect();
        if let Some(last) = widths.last().copied() {
            widths.push(last);
        }
        widths
    }
    /// Calculate the probability of a photon having a given wavelength.
    ///
    /// # Errors
    ///
    /// This function returns an error if the total photon flux is not positive.
    pub fn probability_distribution(&self) -> MeResult<SpectralDistribution> {
        let weights: Vec<f64> = self
            .photon_flux()
            .iter()
            .zip(self.bin_widths())
            .map(|(n, d)| n * d)
            .collect();
        Ok(SpectralDistribution {
            name: SOLAR_DISTRIBUTION_NAME.to_owned(),
            wavelength: self.wavelengths.clone(),
            probability: normalize(&weights)?,
        })
    }
}

fn parse_field(record: &csv::StringRecord, index: usize, line: usize) -> MeResult<f64> {
    record
        .get(index)
        .ok_or_else(|| {
            MothEyeError::Spectrum(format!("missing column {index} in line {}", line + 1))
        })?
        .parse::<f64>()
        .map_err(|e| MothEyeError::Spectrum(format!("line {}: {e}", line + 1)))
}

/// Tabulated probability of photon wavelengths (in nm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralDistribution {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Wavelength")]
    wavelength: Vec<f64>,
    #[serde(rename = "Probability")]
    probability: Vec<f64>,
}
impl SpectralDistribution {
    /// Returns the name of this distribution.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the wavelengths in nm.
    #[must_use]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelength
    }
    /// Returns the probability of each wavelength.
    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probability
    }
    /// Write this distribution as JSON document to the given path.
    ///
    /// # Errors
    ///
    /// This function returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> MeResult<()> {
        save_json(self, path)
    }
    /// Create a plot of the probability over the wavelength.
    #[must_use]
    pub fn to_curve_plot(&self) -> CurvePlot {
        let mut plot = CurvePlot::new(&self.name, "wavelength in nm", "probability");
        plot.add_xy(&self.wavelength, &self.probability, None);
        plot
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;
    use kahan::KahanSummator;
    use std::io::Write;
    use strum::IntoEnumIterator;

    const TABLE: &str = "ASTM G173-03 Reference Spectra Derived from SMARTS v. 2.9.2
Wvlgth nm,Etr W*m-2*nm-1,Global tilt  W*m-2*nm-1,Direct+circumsolar W*m-2*nm-1
280.0,8.2000E-02,4.7309E-23,2.5361E-26
290.0,0.5,0.2,0.1
300.0,0.6,0.3,0.2
320.0,0.8,0.4,0.4
";
    #[test]
    fn column_default() {
        assert_eq!(SolarColumn::default(), SolarColumn::DirectCircumsolar);
        assert_eq!(SolarColumn::iter().count(), 3);
        assert_eq!(SolarColumn::GlobalTilt.to_string(), "global tilt");
    }
    #[test]
    fn from_reader() {
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::default()).unwrap();
        assert_eq!(s.wavelengths(), &[280.0, 290.0, 300.0, 320.0]);
        assert_eq!(s.irradiance(), &[2.5361E-26, 0.1, 0.2, 0.4]);
        assert_eq!(s.column(), SolarColumn::DirectCircumsolar);
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::Extraterrestrial).unwrap();
        assert_eq!(s.irradiance(), &[8.2E-02, 0.5, 0.6, 0.8]);
    }
    #[test]
    fn from_reader_errors() {
        let header_only = "title\nwavelength,a,b,c\n";
        assert_matches!(
            SolarSpectrum::from_reader(header_only.as_bytes(), SolarColumn::default()),
            Err(MothEyeError::Spectrum(_))
        );
        let one_row = "title\nwavelength,a,b,c\n300,1,1,1\n";
        assert!(SolarSpectrum::from_reader(one_row.as_bytes(), SolarColumn::default()).is_err());
        let invalid = "title\nwavelength,a,b,c\n300,1,1,1\n310,1,1,abc\n";
        assert!(SolarSpectrum::from_reader(invalid.as_bytes(), SolarColumn::default()).is_err());
        let missing = "title\nwavelength,a,b,c\n300,1,1,1\n310,1\n";
        assert!(SolarSpectrum::from_reader(missing.as_bytes(), SolarColumn::default()).is_err());
        assert!(
            SolarSpectrum::from_reader(missing.as_bytes(), SolarColumn::Extraterrestrial).is_ok()
        );
    }
    #[test]
    fn from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        let s = SolarSpectrum::from_csv(file.path(), SolarColumn::GlobalTilt).unwrap();
        assert_eq!(s.wavelengths().len(), 4);
        assert_matches!(
            SolarSpectrum::from_csv(Path::new("wrong_path.csv"), SolarColumn::default()),
            Err(MothEyeError::Io(_))
        );
    }
    #[test]
    fn photon_flux() {
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::default()).unwrap();
        let flux = s.photon_flux();
        assert_relative_eq!(
            flux[1],
            0.1 * 290.0e-9 / (PLANCK_CONSTANT * SPEED_OF_LIGHT),
            max_relative = 1e-12
        );
    }
    #[test]
    fn bin_widths() {
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::default()).unwrap();
        assert_eq!(s.bin_widths(), vec![10.0, 10.0, 20.0, 20.0]);
    }
    #[test]
    fn probability_distribution() {
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::default()).unwrap();
        let d = s.probability_distribution().unwrap();
        assert_eq!(d.name(), SOLAR_DISTRIBUTION_NAME);
        assert_eq!(d.wavelengths(), s.wavelengths());
        let sum: f64 = d.probabilities().iter().kahan_sum().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        // weights ∝ E·λ·Δλ
        let w = [0.1 * 290.0 * 10.0, 0.2 * 300.0 * 20.0, 0.4 * 320.0 * 20.0];
        assert_relative_eq!(
            d.probabilities()[2] / d.probabilities()[1],
            w[1] / w[0],
            max_relative = 1e-9
        );
        assert_relative_eq!(
            d.probabilities()[3] / d.probabilities()[1],
            w[2] / w[0],
            max_relative = 1e-9
        );
    }
    #[test]
    fn probability_distribution_zero_flux() {
        let zeros = "title\nwavelength,a,b,c\n300,0,0,0\n310,0,0,0\n";
        let s = SolarSpectrum::from_reader(zeros.as_bytes(), SolarColumn::default()).unwrap();
        assert_matches!(
            s.probability_distribution(),
            Err(MothEyeError::Distribution(_))
        );
    }
    #[test]
    fn save() {
        let s = SolarSpectrum::from_reader(TABLE.as_bytes(), SolarColumn::default()).unwrap();
        let d = s.probability_distribution().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SOLAR_DISTRIBUTION_FILE_NAME);
        d.save(&path).unwrap();
        let read: SpectralDistribution =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read.wavelengths(), d.wavelengths());
        assert_eq!(d.to_curve_plot().series().len(), 1);
    }
}
