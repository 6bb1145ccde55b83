use thiserror::Error;

/// The units the dashboard can display optical power in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUnit {
    /// Decibels relative to 1 mW.
    DBm,
    /// Decibels relative to a caller-supplied reference level.
    Db,
    MilliWatt,
    MicroWatt,
    NanoWatt,
}

impl PowerUnit {
    pub fn label(&self) -> &'static str {
        match self {
            PowerUnit::DBm => "dBm",
            PowerUnit::Db => "dB",
            PowerUnit::MilliWatt => "mW",
            PowerUnit::MicroWatt => "µW",
            PowerUnit::NanoWatt => "nW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UnitError {
    /// Zero or negative power has no logarithmic representation. The
    /// converter refuses it rather than emit NaN or -inf; callers render
    /// "N/A" or similar.
    #[error("power {value} {unit} is outside the logarithm domain")]
    OutOfDomain { value: f64, unit: &'static str },
}

/// Linear milliwatts to dBm.
pub fn mw_to_dbm(mw: f64) -> Result<f64, UnitError> {
    if mw <= 0.0 {
        return Err(UnitError::OutOfDomain {
            value: mw,
            unit: "mW",
        });
    }
    Ok(10.0 * mw.log10())
}

/// dBm to linear milliwatts.
pub fn dbm_to_mw(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0)
}

/// Convert an optical power value between display units.
///
/// `reference_db` is the level that `Db` values are relative to, in dBm.
/// Every current call site passes 0.0, which makes dB and dBm numerically
/// identical; the parameter stays explicit so that assumption never bakes
/// itself into the math.
pub fn convert(
    value: f64,
    from: PowerUnit,
    to: PowerUnit,
    reference_db: f64,
) -> Result<f64, UnitError> {
    let dbm = match from {
        PowerUnit::DBm => value,
        PowerUnit::Db => value + reference_db,
        _ if value <= 0.0 => {
            return Err(UnitError::OutOfDomain {
                value,
                unit: from.label(),
            });
        }
        PowerUnit::MilliWatt => mw_to_dbm(value)?,
        PowerUnit::MicroWatt => mw_to_dbm(value / 1e3)?,
        PowerUnit::NanoWatt => mw_to_dbm(value / 1e6)?,
    };

    Ok(match to {
        PowerUnit::DBm => dbm,
        PowerUnit::Db => dbm - reference_db,
        PowerUnit::MilliWatt => dbm_to_mw(dbm),
        PowerUnit::MicroWatt => dbm_to_mw(dbm) * 1e3,
        PowerUnit::NanoWatt => dbm_to_mw(dbm) * 1e6,
    })
}
