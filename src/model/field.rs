//! Field descriptors dan canonical order
//!
//! Urutan wire ditentukan oleh `CANONICAL_ORDER`, bukan oleh urutan
//! deklarasi field di struct `Datasheet`.

/// Tipe semantik sebuah field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned integer (u32)
    Count,
    /// Signed integer (i32)
    Integer,
    /// Real number (f64)
    Real,
}

/// Descriptor untuk setiap field Datasheet
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WiresCount = 0,
    CentroidDispersion = 1,
    MeanLength = 2,
    StdLength = 3,
    Lx = 4,
    Ly = 5,
    Kp0 = 6,
    EtaP = 7,
    Kd0 = 8,
    EtaD = 9,
    YMin = 10,
    YMax = 11,
    Seed = 12,
}

/// Jumlah slot dalam satu encoded datasheet
pub const FIELD_COUNT: usize = 13;

/// Satu-satunya urutan encode/decode yang valid
pub const CANONICAL_ORDER: [Field; FIELD_COUNT] = [
    Field::WiresCount,
    Field::CentroidDispersion,
    Field::MeanLength,
    Field::StdLength,
    Field::Lx,
    Field::Ly,
    Field::Kp0,
    Field::EtaP,
    Field::Kd0,
    Field::EtaD,
    Field::YMin,
    Field::YMax,
    Field::Seed,
];

impl Field {
    /// Posisi field di buffer
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn from_index(index: usize) -> Option<Self> {
        CANONICAL_ORDER.get(index).copied()
    }

    /// Nama field seperti di datasheet device
    pub const fn name(self) -> &'static str {
        match self {
            Self::WiresCount => "wires_count",
            Self::CentroidDispersion => "centroid_dispersion",
            Self::MeanLength => "mean_length",
            Self::StdLength => "std_length",
            Self::Lx => "Lx",
            Self::Ly => "Ly",
            Self::Kp0 => "kp0",
            Self::EtaP => "eta_p",
            Self::Kd0 => "kd0",
            Self::EtaD => "eta_d",
            Self::YMin => "Y_min",
            Self::YMax => "Y_max",
            Self::Seed => "seed",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::WiresCount | Self::CentroidDispersion | Self::Lx | Self::Ly | Self::Seed => {
                FieldKind::Count
            }
            Self::EtaP | Self::EtaD => FieldKind::Integer,
            Self::MeanLength
            | Self::StdLength
            | Self::Kp0
            | Self::Kd0
            | Self::YMin
            | Self::YMax => FieldKind::Real,
        }
    }
}
