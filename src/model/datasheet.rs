//! Device Datasheet
//!
//! Properti statis dari device nanowire network yang disimulasikan.
//! Semua field punya nilai default; range yang didokumentasikan bersifat
//! advisory dan tidak dipaksakan oleh tipe ini.

use super::field::Field;
use crate::error::{DatasheetError, Result};

/// Seed default untuk random number generator simulasi
pub const DEFAULT_SEED: u32 = 40;

/// Static properties dari device
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Datasheet {
    /// Total wire yang di-sample
    pub wires_count: u32,
    /// Scale parameter distribusi centroid wire (µm)
    pub centroid_dispersion: u32,
    /// Rata-rata panjang wire (µm)
    pub mean_length: f64,
    /// Standar deviasi panjang wire (µm)
    pub std_length: f64,

    // device size
    /// Panjang horizontal device (µm)
    #[cfg_attr(feature = "serde", serde(rename = "Lx"))]
    pub lx: u32,
    /// Panjang vertikal device (µm)
    #[cfg_attr(feature = "serde", serde(rename = "Ly"))]
    pub ly: u32,

    // update_edge_weights parameters
    pub kp0: f64,
    pub eta_p: i32,
    pub kd0: f64,
    pub eta_d: i32,

    // admittance
    #[cfg_attr(feature = "serde", serde(rename = "Y_min"))]
    pub y_min: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Y_max"))]
    pub y_max: f64,

    /// Seed RNG agar distribusi yang sama selalu ter-generate
    pub seed: u32,
}

impl Default for Datasheet {
    fn default() -> Self {
        Self {
            wires_count: 1500,
            centroid_dispersion: 200,
            mean_length: 40.0,
            std_length: 14.0,
            lx: 500,
            ly: 500,
            kp0: 0.0001,
            eta_p: 10,
            kd0: 0.5,
            eta_d: 1,
            y_min: 0.001,
            y_max: 0.1,
            seed: DEFAULT_SEED,
        }
    }
}

macro_rules! with_setters {
    ($($name:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            #[inline(always)]
            pub fn $name(mut self, value: $ty) -> Self {
                self.$field = value;
                self
            }
        )*
    };
}

impl Datasheet {
    /// Datasheet dengan semua nilai default
    pub fn new() -> Self {
        Self::default()
    }

    with_setters! {
        with_wires_count => wires_count: u32,
        with_centroid_dispersion => centroid_dispersion: u32,
        with_mean_length => mean_length: f64,
        with_std_length => std_length: f64,
        with_lx => lx: u32,
        with_ly => ly: u32,
        with_kp0 => kp0: f64,
        with_eta_p => eta_p: i32,
        with_kd0 => kd0: f64,
        with_eta_d => eta_d: i32,
        with_y_min => y_min: f64,
        with_y_max => y_max: f64,
        with_seed => seed: u32,
    }

    /// Nilai field, di-widen ke f64
    #[inline(always)]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::WiresCount => f64::from(self.wires_count),
            Field::CentroidDispersion => f64::from(self.centroid_dispersion),
            Field::MeanLength => self.mean_length,
            Field::StdLength => self.std_length,
            Field::Lx => f64::from(self.lx),
            Field::Ly => f64::from(self.ly),
            Field::Kp0 => self.kp0,
            Field::EtaP => f64::from(self.eta_p),
            Field::Kd0 => self.kd0,
            Field::EtaD => f64::from(self.eta_d),
            Field::YMin => self.y_min,
            Field::YMax => self.y_max,
            Field::Seed => f64::from(self.seed),
        }
    }

    /// Set field dari nilai f64.
    ///
    /// Field integer di-truncate ke arah nol. NaN, infinity, atau nilai di
    /// luar range tipe integer menghasilkan `NumericOverflow` dan field
    /// tidak diubah.
    #[inline(always)]
    pub fn set(&mut self, field: Field, value: f64) -> Result<()> {
        match field {
            Field::WiresCount => self.wires_count = narrow_u32(field, value)?,
            Field::CentroidDispersion => self.centroid_dispersion = narrow_u32(field, value)?,
            Field::MeanLength => self.mean_length = value,
            Field::StdLength => self.std_length = value,
            Field::Lx => self.lx = narrow_u32(field, value)?,
            Field::Ly => self.ly = narrow_u32(field, value)?,
            Field::Kp0 => self.kp0 = value,
            Field::EtaP => self.eta_p = narrow_i32(field, value)?,
            Field::Kd0 => self.kd0 = value,
            Field::EtaD => self.eta_d = narrow_i32(field, value)?,
            Field::YMin => self.y_min = value,
            Field::YMax => self.y_max = value,
            Field::Seed => self.seed = narrow_u32(field, value)?,
        }
        Ok(())
    }

    /// Datasheet untuk device persegi dengan density tertentu.
    ///
    /// `wires_count = trunc(density * size² / wires_length²)`, `Lx = Ly = size`,
    /// `std_length = 0.35 * wires_length`. Field lain memakai default.
    /// Wire count yang NaN atau tidak muat u32 menghasilkan `NumericOverflow`.
    pub fn from_density(density: f64, size: u32, wires_length: f64, seed: u32) -> Result<Self> {
        let size_f = f64::from(size);
        let wires = density * size_f * size_f / (wires_length * wires_length);

        Ok(Self {
            wires_count: narrow_u32(Field::WiresCount, wires)?,
            lx: size,
            ly: size,
            mean_length: wires_length,
            std_length: wires_length * 0.35,
            seed,
            ..Self::default()
        })
    }

    /// Cek range advisory. Codec tidak pernah memanggil ini.
    pub fn validate(&self) -> Result<()> {
        let reals = [
            (Field::MeanLength, self.mean_length),
            (Field::StdLength, self.std_length),
            (Field::Kp0, self.kp0),
            (Field::Kd0, self.kd0),
            (Field::YMin, self.y_min),
            (Field::YMax, self.y_max),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.lx == 0 {
            return Err(invalid(Field::Lx, "must be greater than zero"));
        }
        if self.ly == 0 {
            return Err(invalid(Field::Ly, "must be greater than zero"));
        }
        if self.std_length < 0.0 {
            return Err(invalid(Field::StdLength, "must not be negative"));
        }
        if self.y_min <= 0.0 {
            return Err(invalid(Field::YMin, "must be greater than zero"));
        }
        if self.y_max <= self.y_min {
            return Err(invalid(Field::YMax, "must be greater than Y_min"));
        }

        Ok(())
    }
}

fn invalid(field: Field, reason: &'static str) -> DatasheetError {
    DatasheetError::InvalidField { field, reason }
}

#[inline(always)]
fn narrow_u32(field: Field, value: f64) -> Result<u32> {
    let truncated = value.trunc();
    // NaN tidak pernah contained
    if (0.0..=f64::from(u32::MAX)).contains(&truncated) {
        Ok(truncated as u32)
    } else {
        Err(DatasheetError::NumericOverflow { field, value })
    }
}

#[inline(always)]
fn narrow_i32(field: Field, value: f64) -> Result<i32> {
    let truncated = value.trunc();
    if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&truncated) {
        Ok(truncated as i32)
    } else {
        Err(DatasheetError::NumericOverflow { field, value })
    }
}
