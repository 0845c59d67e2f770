//! The builtin column catalog.
//!
//! One entry per known vendor column header. The microcontroller-only and
//! radio matrices share the common block; each adds its own columns on top.
//! Headers without an entry are ignored, so new vendor columns never break
//! a conversion.

use crate::error::{ChipgenError, Result};
use crate::record::Record;

use super::rules::ColumnRule;

/// Binds one vendor column header to a rule and its output key.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub key: &'static str,
    pub rule: ColumnRule,
}

impl ColumnSpec {
    const fn new(header: &'static str, key: &'static str, rule: ColumnRule) -> Self {
        Self { header, key, rule }
    }
}

/// Static table mapping vendor column headers to transform rules.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    specs: Vec<ColumnSpec>,
}

impl ColumnMap {
    /// The builtin catalog covering the vendor matrix variants.
    pub fn builtin() -> Self {
        use ColumnRule::*;

        let specs = vec![
            // Common
            ColumnSpec::new("Part Number", "NAME", Copy),
            ColumnSpec::new("Data Sheet", "DATASHEET", Datasheet),
            ColumnSpec::new("Package Type", "PACKAGE", Package),
            ColumnSpec::new("USB", "USB", YesNo),
            ColumnSpec::new("Timers (16-bit)", "TIMER", Copy),
            ColumnSpec::new("ADC 1", "ADC", AnalogMerge),
            ColumnSpec::new("DAC", "DAC", AnalogMerge),
            ColumnSpec::new("Comparators", "COMPARATOR", Copy),
            // Microcontroller matrix
            ColumnSpec::new("Kit", "REFDES", Datasheet),
            ColumnSpec::new("MCU Core", "CORE", CoreName),
            ColumnSpec::new("Core Frequency", "FREQ", Copy),
            ColumnSpec::new("Flash (kB)", "FLASH", Copy),
            ColumnSpec::new("RAM (kB)", "RAM", Copy),
            ColumnSpec::new("Dig I/O", "IO", Copy),
            ColumnSpec::new("Communications", "", PeripheralCounts),
            ColumnSpec::new("EMIF", "EBI", Copy),
            ColumnSpec::new("CAN", "CAN", Copy),
            ColumnSpec::new("PCA Channels", "", Ignore),
            ColumnSpec::new("Internal Oscillator", "OSC_PREC", StripFirst),
            ColumnSpec::new("LIN", "", Ignore),
            ColumnSpec::new("ADC 2", "ADC", AnalogMerge),
            ColumnSpec::new("Package Size (mm)", "SIZE", Copy),
            ColumnSpec::new("Cryptography", "CRYPTO", TokenList),
            ColumnSpec::new("Ethernet", "ETH", YesNo),
            ColumnSpec::new("LESENSE", "", Ignore),
            ColumnSpec::new("Capacitive Sense", "CAPSENSE", YesNo),
            // Radio matrix
            ColumnSpec::new("MCU", "CORE", CoreName),
            ColumnSpec::new("MCU Frequency (MHz)", "FREQ", Copy),
            ColumnSpec::new("Flash", "FLASH", Copy),
            ColumnSpec::new("RAM", "RAM", Copy),
            ColumnSpec::new("I\u{00b2}C", "I2C", Copy),
            ColumnSpec::new("I\u{00b2}S", "I2S", Copy),
            ColumnSpec::new("SPI", "SPI", Copy),
            ColumnSpec::new("UART", "UART", Copy),
            ColumnSpec::new("USART", "USART", Copy),
            ColumnSpec::new("Bluetooth Low Energy", "RADIO", Flag("ble")),
            ColumnSpec::new("Bluetooth 5", "RADIO", Flag("ble5")),
            ColumnSpec::new("Bluetooth 5 2M PHY", "RADIO", Flag("2M phy")),
            ColumnSpec::new("Bluetooth 5 LE Long Range", "RADIO", Flag("lr")),
            ColumnSpec::new("zigbee", "RADIO", Flag("zigbee")),
            ColumnSpec::new("Thread", "RADIO", Flag("thread")),
            ColumnSpec::new("Proprietary Sub-GHz", "RADIO", Flag("prop-SubG")),
            ColumnSpec::new("Proprietary 2.4 GHz", "RADIO", Flag("prop-2G")),
            ColumnSpec::new("Output Power (dBm)", "RADIO_TXP", UnitList("dBm")),
            ColumnSpec::new("Frequency Range", "RADIO_FREQ", UnitList("MHz")),
            ColumnSpec::new("RX Current (mA)", "RADIO_RXI", Unit("mA")),
            ColumnSpec::new("AES-128", "CRYPTO", Flag("aes128")),
            ColumnSpec::new("AES-256", "CRYPTO", Flag("aes256")),
            ColumnSpec::new("ECC", "CRYPTO", Flag("ecc")),
            ColumnSpec::new("SHA-1", "CRYPTO", Flag("sha1")),
            ColumnSpec::new("SHA-2", "CRYPTO", Flag("sha2")),
        ];

        Self { specs }
    }

    fn spec_for(&self, header: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|s| s.header == header)
    }

    /// Map one raw row into a normalized record.
    ///
    /// The part-number column is applied first so that rules which fix up
    /// `NAME` (the package-suffix strip) always see it populated,
    /// regardless of where the vendor put the columns. `row` is the
    /// zero-based data row index, used for error reporting only.
    pub fn map_row(&self, headers: &[String], cells: &[String], row: usize) -> Result<Record> {
        let mut record = Record::new();

        for name_pass in [true, false] {
            for (header, raw) in headers.iter().zip(cells) {
                let Some(spec) = self.spec_for(header) else {
                    continue;
                };
                if (spec.key == "NAME") != name_pass {
                    continue;
                }
                spec.rule.apply(&mut record, spec.key, raw).map_err(|e| {
                    ChipgenError::MalformedCell {
                        column: header.clone(),
                        row,
                        detail: e.to_string(),
                    }
                })?;
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_map_row_basic() {
        let map = ColumnMap::builtin();
        let headers = to_strings(&["Part Number", "MCU Core", "Flash (kB)", "USB"]);
        let cells = to_strings(&["EFM32GG890F512", "ARM Cortex-M4", "512", "Yes"]);
        let rec = map.map_row(&headers, &cells, 0).unwrap();

        assert_eq!(rec.get("NAME"), Some("efm32gg890f512"));
        assert_eq!(rec.get("CORE"), Some("m4"));
        assert_eq!(rec.get("FLASH"), Some("512"));
        assert_eq!(rec.get("USB"), Some("1"));
    }

    #[test]
    fn test_unknown_headers_are_ignored() {
        let map = ColumnMap::builtin();
        let headers = to_strings(&["Part Number", "Marketing Blurb"]);
        let cells = to_strings(&["EFM32GG890F512", "best chip ever"]);
        let rec = map.map_row(&headers, &cells, 0).unwrap();

        assert_eq!(rec.len(), 1);
        assert_eq!(rec.get("NAME"), Some("efm32gg890f512"));
    }

    #[test]
    fn test_name_is_mapped_before_package() {
        let map = ColumnMap::builtin();
        // Package column ahead of the part number on purpose.
        let headers = to_strings(&["Package Type", "Part Number"]);
        let cells = to_strings(&["BGA112", "EFM32GG990F1024-BGA112"]);
        let rec = map.map_row(&headers, &cells, 0).unwrap();

        assert_eq!(rec.get("NAME"), Some("efm32gg990f1024"));
        assert_eq!(rec.get("PACKAGE"), Some("bga112"));
    }

    #[test]
    fn test_radio_flags_fold_into_one_key() {
        let map = ColumnMap::builtin();
        let headers = to_strings(&[
            "Part Number",
            "Bluetooth Low Energy",
            "Bluetooth 5",
            "Thread",
        ]);
        let cells = to_strings(&["EFR32BG1P232F256GM48", "Yes", "Yes", "No"]);
        let rec = map.map_row(&headers, &cells, 0).unwrap();

        assert_eq!(rec.get("RADIO"), Some("ble,ble5,"));
    }

    #[test]
    fn test_malformed_communications_cell_is_fatal() {
        let map = ColumnMap::builtin();
        let headers = to_strings(&["Part Number", "Communications"]);
        let cells = to_strings(&["EFM32GG890F512", "USART"]);
        let err = map.map_row(&headers, &cells, 7).unwrap_err();

        match err {
            ChipgenError::MalformedCell { column, row, .. } => {
                assert_eq!(column, "Communications");
                assert_eq!(row, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
