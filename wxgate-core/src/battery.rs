//! Battery Strategy Resolution
//!
//! Gateways report battery state for every paired sensor, but not in one format:
//! some sensors send a low-battery flag, some a voltage, some a charge level.
//! Which is which depends on the sensor model, so the interpretation is
//! configuration, not code:
//!
//! ```text
//! strategy   raw   published
//! ---------  ----  ---------
//! boolean    0     "OFF"        (battery fine)
//! boolean    1     "ON"         (battery low)
//! numeric    1.6   1.6 V
//! percentage 140   100 %
//! ```
//!
//! The effective strategy for a key is its override if one is configured,
//! otherwise the configured default.

use crate::config::{BatteryStrategy, CalculationConfig};
use crate::constants::thresholds::VOLTAGE_DECIMAL_PLACES;
use crate::reading::{CalculatedDataPoint, RawValue};
use crate::units::round_to;

/// State published for a boolean reading that is zero
pub const STATE_OFF: &str = "OFF";

/// State published for a boolean reading that is non-zero
pub const STATE_ON: &str = "ON";

/// Unit of a battery reading under `strategy`
pub fn battery_unit(strategy: BatteryStrategy) -> Option<&'static str> {
    match strategy {
        BatteryStrategy::Boolean => None,
        BatteryStrategy::Numeric => Some("V"),
        BatteryStrategy::Percentage => Some("%"),
    }
}

/// Render a raw battery value for `key` under the configured strategy.
///
/// Negative or non-numeric values give a null point.
pub fn resolve_battery(key: &str, raw: &RawValue, config: &CalculationConfig) -> CalculatedDataPoint {
    let strategy = config.battery_strategy(key);
    let unit = battery_unit(strategy);

    let value = match raw.as_f64() {
        Some(value) if value >= 0.0 => value,
        _ => {
            log_debug!("Battery reading {} is not usable: {:?}", key, raw);
            return CalculatedDataPoint::null(unit);
        }
    };

    match strategy {
        BatteryStrategy::Boolean => CalculatedDataPoint::text(if value == 0.0 { STATE_OFF } else { STATE_ON }),
        BatteryStrategy::Numeric => {
            CalculatedDataPoint::number(round_to(value, VOLTAGE_DECIMAL_PLACES), unit)
        }
        BatteryStrategy::Percentage => CalculatedDataPoint::number(value.clamp(0.0, 100.0), unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::DataValue;

    fn config(strategy: BatteryStrategy) -> CalculationConfig {
        CalculationConfig::builder()
            .default_battery_strategy(strategy)
            .build()
            .unwrap()
    }

    #[test]
    fn boolean_strategy() {
        let config = config(BatteryStrategy::Boolean);
        assert_eq!(resolve_battery("wh65batt", &RawValue::from("0"), &config).value, DataValue::Text("OFF".into()));
        assert_eq!(resolve_battery("wh65batt", &RawValue::from("1"), &config).value, DataValue::Text("ON".into()));
        assert_eq!(resolve_battery("wh65batt", &RawValue::from(3.0), &config).unit, None);
    }

    #[test]
    fn numeric_strategy() {
        let point = resolve_battery("soilbatt1", &RawValue::from("1.567"), &config(BatteryStrategy::Numeric));
        assert_eq!(point.value, DataValue::Number(1.57));
        assert_eq!(point.unit, Some("V"));
    }

    #[test]
    fn percentage_strategy_clamps() {
        let config = config(BatteryStrategy::Percentage);
        assert_eq!(resolve_battery("b", &RawValue::from("140"), &config).value, DataValue::Number(100.0));
        assert_eq!(resolve_battery("b", &RawValue::from("55"), &config).value, DataValue::Number(55.0));
        assert_eq!(resolve_battery("b", &RawValue::from("55"), &config).unit, Some("%"));
    }

    #[test]
    fn override_wins() {
        let config = CalculationConfig::builder()
            .default_battery_strategy(BatteryStrategy::Boolean)
            .battery_override("wh68batt", BatteryStrategy::Numeric)
            .build()
            .unwrap();

        assert_eq!(resolve_battery("wh68batt", &RawValue::from("1.38"), &config).value, DataValue::Number(1.38));
        assert_eq!(resolve_battery("wh65batt", &RawValue::from("1"), &config).value, DataValue::Text("ON".into()));
    }

    #[test]
    fn unusable_values_are_null() {
        for strategy in [BatteryStrategy::Boolean, BatteryStrategy::Numeric, BatteryStrategy::Percentage] {
            let config = config(strategy);
            assert!(resolve_battery("b", &RawValue::from("-1"), &config).value.is_null());
            assert!(resolve_battery("b", &RawValue::from("low"), &config).value.is_null());
        }
    }
}
