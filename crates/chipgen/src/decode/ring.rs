//! The decoder ring: ordered part-name rules.
//!
//! Rules are scanned top to bottom and the first whose prefix matches the
//! start of the part name wins. Order is load-bearing where prefixes
//! overlap: `efm32gg1` must be tried before `efm32gg`, `efm32tg11b`
//! before `efm32tg`, and everything EFM32 before the bare `efm32g`
//! catch-all, or the wrong family is selected.

use regex::Regex;

use crate::error::{ChipgenError, Result};

use super::family::Family;

/// Operating temperature grade encoded in the part name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempGrade {
    /// Grade letter `g`, and the default when the name carries no grade.
    Standard,
    /// Grade letter `i`.
    Extended,
}

impl TempGrade {
    /// The operating range string emitted under `TEMP`.
    pub fn range(&self) -> &'static str {
        match self {
            TempGrade::Standard => "-40,85",
            TempGrade::Extended => "-40,125",
        }
    }

    fn from_code(part: &str, code: char) -> Result<Self> {
        match code {
            'g' => Ok(TempGrade::Standard),
            'i' => Ok(TempGrade::Extended),
            grade => Err(ChipgenError::UnknownTempGrade {
                part: part.to_string(),
                grade,
            }),
        }
    }
}

/// What the decoder extracts from one part name.
#[derive(Debug, Clone)]
pub struct DecodedInfo {
    pub family: Family,
    /// Debugger-visible device name, captured directly or synthesized
    /// from the captured start and end fragments.
    pub gdb_name: String,
    /// Memory/peripheral configuration code within the family.
    pub feature: String,
    pub temp: TempGrade,
}

/// One ordered decode rule.
///
/// Extraction patterns use named groups: `gdb` for a directly captured
/// debugger name, `feature` for the configuration code, `temp` for the
/// grade letter, and `gdbs`/`gdbe` for the fragments the radio families
/// synthesize their debugger name from.
#[derive(Debug, Clone)]
pub struct DecoderRule {
    prefix: &'static str,
    family: Family,
    pattern: Regex,
}

impl DecoderRule {
    fn new(prefix: &'static str, family: Family, pattern: &str) -> Self {
        Self {
            prefix,
            family,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

/// The ordered rule list.
#[derive(Debug, Clone)]
pub struct DecoderRing {
    rules: Vec<DecoderRule>,
}

impl DecoderRing {
    /// The builtin ring covering all supported families.
    pub fn builtin() -> Self {
        let rules = vec![
            // Microcontroller products. Sub-variant prefixes first.
            DecoderRule::new(
                "efm32gg1",
                Family::GiantS1,
                r"(?P<gdb>efm32gg1.b(?P<feature>...)f\d+)(?P<temp>.).+",
            ),
            DecoderRule::new(
                "efm32gg",
                Family::Giant,
                r"(?P<gdb>efm32gg(?P<feature>...)f\d+).+",
            ),
            DecoderRule::new(
                "efm32hg",
                Family::Happy,
                r"(?P<gdb>efm32hg(?P<feature>...)f\d+).+",
            ),
            DecoderRule::new(
                "efm32lg",
                Family::Leopard,
                r"(?P<gdb>efm32lg(?P<feature>...)f\d+).+",
            ),
            DecoderRule::new(
                "efm32pg1",
                Family::Pearl,
                r"(?P<gdb>efm32pg1.*b(?P<feature>...)f\d+)(?P<temp>.).+",
            ),
            DecoderRule::new(
                "efm32jg1",
                Family::Jade,
                r"(?P<gdb>efm32jg1.*b(?P<feature>...)f\d+)(?P<temp>.).+",
            ),
            DecoderRule::new(
                "efm32tg11b",
                Family::TinyS1,
                r"(?P<gdb>efm32tg11b(?P<feature>...)f\d+)(?P<temp>.).+",
            ),
            DecoderRule::new(
                "efm32tg",
                Family::Tiny,
                r"(?P<gdb>efm32tg(?P<feature>...)f\d+).*",
            ),
            DecoderRule::new(
                "efm32wg",
                Family::Wonder,
                r"(?P<gdb>efm32wg(?P<feature>...)f\d+).*",
            ),
            DecoderRule::new(
                "efm32zg",
                Family::Zero,
                r"(?P<gdb>efm32zg(?P<feature>...)f\d+).*",
            ),
            DecoderRule::new(
                "efm32g",
                Family::Gecko,
                r"(?P<gdb>efm32g(?P<feature>...)f\d+).+",
            ),
            DecoderRule::new(
                "sim3",
                Family::Precision,
                r"(?P<gdb>sim3.(?P<feature>.)..)-.-(?P<temp>.).*",
            ),
            // Radio products. The debugger name is synthesized as
            // <gdbs>xxx<gdbe>.
            DecoderRule::new(
                "efr32bg1",
                Family::Blue,
                r"(?P<gdbs>efr32bg\d+[pbv])(?P<feature>\d{3})(?P<gdbe>f\d+)(?P<temp>[gi]).+",
            ),
            DecoderRule::new(
                "efr32fg1",
                Family::Flex,
                r"(?P<gdbs>efr32fg\d+[pbv])(?P<feature>\d{3})(?P<gdbe>f\d+)(?P<temp>[gi]).+",
            ),
            DecoderRule::new(
                "efr32mg1",
                Family::Mighty,
                r"(?P<gdbs>efr32mg\d+[pbv])(?P<feature>\d{3})(?P<gdbe>f\d+)(?P<temp>[gi]).+",
            ),
        ];

        Self { rules }
    }

    /// Decode a normalized (lower-case) part name.
    pub fn decode(&self, name: &str) -> Result<DecodedInfo> {
        let rule = self
            .rules
            .iter()
            .find(|r| name.starts_with(r.prefix))
            .ok_or_else(|| ChipgenError::UnknownFamily {
                part: name.to_string(),
            })?;

        let unparseable = || ChipgenError::Unparseable {
            part: name.to_string(),
        };

        let caps = rule.pattern.captures(name).ok_or_else(unparseable)?;
        let feature = caps.name("feature").ok_or_else(unparseable)?.as_str();

        let gdb_name = match caps.name("gdb") {
            Some(m) => m.as_str().to_string(),
            None => {
                let start = caps.name("gdbs").ok_or_else(unparseable)?.as_str();
                let end = caps.name("gdbe").ok_or_else(unparseable)?.as_str();
                format!("{start}xxx{end}")
            }
        };

        let temp = match caps.name("temp") {
            None => TempGrade::Standard,
            Some(m) => {
                let code = m.as_str().chars().next().ok_or_else(unparseable)?;
                TempGrade::from_code(name, code)?
            }
        };

        Ok(DecodedInfo {
            family: rule.family,
            gdb_name,
            feature: feature.to_string(),
            temp,
        })
    }
}
