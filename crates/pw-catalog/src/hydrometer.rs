//! Hydrometer (water meter) ratings and pressure loss.

use pw_core::Real;

/// Rated maximum flow of a hydrometer, in m³/h. `None` means the segment
/// carries no hydrometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HydrometerRating {
    #[default]
    None,
    Q1_5,
    Q3,
    Q5,
    Q7,
    Q10,
    Q20,
    Q30,
}

impl HydrometerRating {
    pub const ALL: [HydrometerRating; 8] = [
        HydrometerRating::None,
        HydrometerRating::Q1_5,
        HydrometerRating::Q3,
        HydrometerRating::Q5,
        HydrometerRating::Q7,
        HydrometerRating::Q10,
        HydrometerRating::Q20,
        HydrometerRating::Q30,
    ];

    /// Rated maximum flow in m³/h (0 for no hydrometer).
    pub fn max_flow_m3_h(self) -> Real {
        match self {
            HydrometerRating::None => 0.0,
            HydrometerRating::Q1_5 => 1.5,
            HydrometerRating::Q3 => 3.0,
            HydrometerRating::Q5 => 5.0,
            HydrometerRating::Q7 => 7.0,
            HydrometerRating::Q10 => 10.0,
            HydrometerRating::Q20 => 20.0,
            HydrometerRating::Q30 => 30.0,
        }
    }

    /// Reverse lookup by exact rated value.
    pub fn from_max_flow(max_flow_m3_h: Real) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.max_flow_m3_h() == max_flow_m3_h)
    }

    /// Pressure loss in kPa for a given flow rate in L/s.
    ///
    /// `(36·q/qmax)²` for a rated hydrometer, zero when absent.
    pub fn pressure_loss_kpa(self, flow_rate_l_s: Real) -> Real {
        let max_flow = self.max_flow_m3_h();
        if max_flow == 0.0 {
            0.0
        } else {
            (36.0 * flow_rate_l_s / max_flow).powi(2)
        }
    }
}
