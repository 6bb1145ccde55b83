use serde::Serialize;

/// Hard ceiling for the chart axis: receivers saturate around +3 dBm.
pub const SATURATION_CEILING_DBM: f64 = 3.0;

/// Hard floor for the chart axis: below -50 dBm there is only noise.
pub const NOISE_FLOOR_DBM: f64 = -50.0;

/// Vertical bounds for the power trend chart, in dBm.
/// `top` is the higher (less negative) bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub top: f64,
    pub bottom: f64,
}

/// Compute an adaptive axis domain for the given history window.
///
/// Padding is proportional to the spread of the data so the bars never sit
/// flush against the chart edges, clamped to the physical ceiling and
/// floor above. An empty window gets the generic low-attenuation-link
/// default of 0 to -10 dBm.
pub fn axis_domain(values: &[f64]) -> AxisDomain {
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return AxisDomain {
            top: 0.0,
            bottom: -10.0,
        };
    };

    if min == max {
        let center = min;
        let pad = f64::max(2.0, center.abs() * 0.1);
        return AxisDomain {
            top: f64::min(SATURATION_CEILING_DBM, center + pad),
            bottom: f64::max(NOISE_FLOOR_DBM, center - pad),
        };
    }

    let range = max - min;
    let pad = f64::max(1.0, range * 0.1);
    AxisDomain {
        top: f64::min(SATURATION_CEILING_DBM, max + pad),
        bottom: f64::max(NOISE_FLOOR_DBM, min - pad),
    }
}
