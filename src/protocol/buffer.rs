//! Fixed Buffer Codec
//!
//! Layout (satu slot per field, urutan `CANONICAL_ORDER`):
//! ┌──────────────┬─────────────────────┬─────┬──────────┐
//! │ wires_count  │ centroid_dispersion │ ... │ seed     │
//! │ slot 0       │ slot 1              │     │ slot 12  │
//! └──────────────┴─────────────────────┴─────┴──────────┘
//!
//! Tidak ada header, version tag, atau length prefix.

use log::warn;

use crate::error::{DatasheetError, Result};
use crate::model::{Datasheet, CANONICAL_ORDER, FIELD_COUNT};

/// Wire form dari satu Datasheet
pub type FixedBuffer = [f64; FIELD_COUNT];

/// Encode datasheet ke fixed buffer. Integer di-widen ke f64.
#[inline(always)]
pub fn encode(datasheet: &Datasheet) -> FixedBuffer {
    let mut buffer = [0.0; FIELD_COUNT];
    for field in CANONICAL_ORDER {
        buffer[field.index()] = datasheet.get(field);
    }
    buffer
}

/// Decode buffer ke datasheet.
///
/// Buffer harus berisi tepat `FIELD_COUNT` slot. Slot integer di-truncate
/// ke arah nol; nilai yang tidak muat di tipe field menghasilkan
/// `NumericOverflow`.
#[inline(always)]
pub fn decode(buffer: &[f64]) -> Result<Datasheet> {
    if buffer.len() != FIELD_COUNT {
        warn!(
            "rejecting datasheet buffer with {} slots (expected {})",
            buffer.len(),
            FIELD_COUNT
        );
        return Err(DatasheetError::MalformedBuffer {
            expected: FIELD_COUNT,
            actual: buffer.len(),
        });
    }

    let mut datasheet = Datasheet::default();
    for field in CANONICAL_ORDER {
        datasheet
            .set(field, buffer[field.index()])
            .map_err(|err| {
                warn!("rejecting datasheet buffer: {}", err);
                err
            })?;
    }
    Ok(datasheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    const DEFAULT_BUFFER: FixedBuffer = [
        1500.0, 200.0, 40.0, 14.0, 500.0, 500.0, 0.0001, 10.0, 0.5, 1.0, 0.001, 0.1, 40.0,
    ];

    #[test]
    fn test_encode_default() {
        assert_eq!(encode(&Datasheet::default()), DEFAULT_BUFFER);
    }

    #[test]
    fn test_decode_default() {
        assert_eq!(decode(&DEFAULT_BUFFER).unwrap(), Datasheet::default());
    }

    #[test]
    fn test_canonical_positions() {
        let d = Datasheet::default()
            .with_wires_count(1)
            .with_centroid_dispersion(2)
            .with_mean_length(3.5)
            .with_std_length(4.5)
            .with_lx(5)
            .with_ly(6)
            .with_kp0(7.5)
            .with_eta_p(-8)
            .with_kd0(9.5)
            .with_eta_d(-10)
            .with_y_min(11.5)
            .with_y_max(12.5)
            .with_seed(13);

        let buffer = encode(&d);
        assert_eq!(
            buffer,
            [1.0, 2.0, 3.5, 4.5, 5.0, 6.0, 7.5, -8.0, 9.5, -10.0, 11.5, 12.5, 13.0]
        );
        assert_eq!(buffer[Field::Seed.index()], 13.0);
    }

    #[test]
    fn test_roundtrip_override() {
        let mut d = Datasheet::default();
        d.seed = 7;
        d.y_max = 0.25;

        let decoded = decode(&encode(&d)).unwrap();
        assert_eq!(decoded, d);
    }

    #[test]
    fn test_roundtrip_integer_extremes() {
        let d = Datasheet::default()
            .with_wires_count(u32::MAX)
            .with_eta_p(i32::MIN)
            .with_eta_d(i32::MAX)
            .with_seed(0);
        assert_eq!(decode(&encode(&d)).unwrap(), d);
    }

    #[test]
    fn test_decode_wrong_length() {
        for len in [0, 12, 14] {
            let buffer = vec![1.0; len];
            match decode(&buffer) {
                Err(DatasheetError::MalformedBuffer { expected, actual }) => {
                    assert_eq!(expected, FIELD_COUNT);
                    assert_eq!(actual, len);
                }
                other => panic!("expected MalformedBuffer, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_decode_truncates_integer_slots() {
        let mut buffer = DEFAULT_BUFFER;
        buffer[Field::WiresCount.index()] = 1500.9;
        buffer[Field::EtaD.index()] = -1.5;

        let d = decode(&buffer).unwrap();
        assert_eq!(d.wires_count, 1500);
        assert_eq!(d.eta_d, -1);
    }

    #[test]
    fn test_decode_numeric_overflow() {
        let mut buffer = DEFAULT_BUFFER;
        buffer[Field::Lx.index()] = 1.0e12;
        assert!(matches!(
            decode(&buffer),
            Err(DatasheetError::NumericOverflow { field: Field::Lx, .. })
        ));

        let mut buffer = DEFAULT_BUFFER;
        buffer[Field::Seed.index()] = f64::NAN;
        assert!(matches!(
            decode(&buffer),
            Err(DatasheetError::NumericOverflow { field: Field::Seed, .. })
        ));
    }
}
