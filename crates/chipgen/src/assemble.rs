//! Record assembly: merge mapped attributes with decoded name info and
//! family metadata into the final emitted record.

use std::fs;
use std::path::PathBuf;

use crate::decode::{DecodedInfo, Family};
use crate::error::Result;
use crate::record::Record;

/// Emitted record type constant.
const RECORD_TYPE: &str = "chipset";

/// Conventional per-family filenames joined into the FILES list.
const CORE_MAP: &str = "core.map";
const IRQ_MAP: &str = "irq.map";
const PERIPH_MAP: &str = "periph.map";
const CLOCK_TREE: &str = "clock.tree";
const BUILD_FILE: &str = "CMakeLists.txt";
const DRIVER_MAP: &str = "driver.map";

/// Finalizes mapped records.
#[derive(Debug, Clone)]
pub struct Assembler {
    deps_root: PathBuf,
}

impl Assembler {
    /// Create an assembler resolving depends files under `deps_root`.
    pub fn new(deps_root: impl Into<PathBuf>) -> Self {
        Self {
            deps_root: deps_root.into(),
        }
    }

    /// Fill in the derived fields on a mapped record.
    ///
    /// Field insertion order here is emission order, so it stays fixed:
    /// TYPE, TEMP, CMFLAGS, MANUAL, FILES, SHORT, LONG, DEPENDS.
    pub fn finish(&self, record: &mut Record, info: &DecodedInfo) -> Result<()> {
        record.set("TYPE", RECORD_TYPE);

        // Accumulator rules always leave one trailing comma behind.
        record.trim_trailing_comma("RADIO");
        record.trim_trailing_comma("CRYPTO");

        record.set("TEMP", info.temp.range());
        record.set(
            "CMFLAGS",
            format!(
                "GDB_NAME:{},GDB_IF:swd,BOOT_PAGE_SIZE:{}",
                info.gdb_name,
                info.family.page_size()
            ),
        );
        record.set("MANUAL", info.family.manual());
        record.set("FILES", file_list(info));

        let core = record.require("CORE")?.to_uppercase();
        record.set("SHORT", format!("Silabs {} C{}", info.family.label(), core));

        let flash = record.require("FLASH")?.to_string();
        let ram = record.require("RAM")?.to_string();
        let package = record.require("PACKAGE")?.to_uppercase();
        record.set("LONG", format!("{flash}kB flash/{ram}kB RAM {package}"));

        if let Some(depends) = self.read_depends(info.family) {
            record.set("DEPENDS", depends);
        }

        Ok(())
    }

    /// Best-effort read of `<deps-root>/<family>/depends`.
    ///
    /// This is the one lookup that tolerates failure: a family without a
    /// depends file simply has no DEPENDS field.
    fn read_depends(&self, family: Family) -> Option<String> {
        let path = self.deps_root.join(family.id()).join("depends");
        let text = fs::read_to_string(path).ok()?;
        let deps: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Some(deps.join(","))
    }
}

/// The conventional support-file list for one part.
fn file_list(info: &DecodedInfo) -> String {
    let dir = info.family.id();
    [
        format!("{dir}/{CORE_MAP}"),
        format!("{dir}/{IRQ_MAP}"),
        format!("{dir}/{PERIPH_MAP}"),
        format!("{dir}/{CLOCK_TREE}"),
        BUILD_FILE.to_string(),
        format!("{dir}/{}/{DRIVER_MAP}", info.feature),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;
    use crate::decode::DecoderRing;
    use crate::error::ChipgenError;

    fn mapped_record() -> Record {
        let mut rec = Record::new();
        rec.set("NAME", "efm32gg890f512");
        rec.set("CORE", "m4");
        rec.set("FLASH", "512");
        rec.set("RAM", "128");
        rec.set("PACKAGE", "bga112");
        rec
    }

    fn decoded(name: &str) -> DecodedInfo {
        DecoderRing::builtin().decode(name).unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let mut rec = mapped_record();
        let info = decoded("efm32gg890f512g-e1152");
        Assembler::new(".").finish(&mut rec, &info).unwrap();

        assert_eq!(rec.get("TYPE"), Some("chipset"));
        assert_eq!(rec.get("TEMP"), Some("-40,85"));
        assert_eq!(
            rec.get("CMFLAGS"),
            Some("GDB_NAME:efm32gg890f512,GDB_IF:swd,BOOT_PAGE_SIZE:512")
        );
        assert_eq!(
            rec.get("FILES"),
            Some(
                "giant/core.map,giant/irq.map,giant/periph.map,giant/clock.tree,\
                 CMakeLists.txt,giant/890/driver.map"
            )
        );
        assert_eq!(rec.get("SHORT"), Some("Silabs Giant CM4"));
        assert_eq!(rec.get("LONG"), Some("512kB flash/128kB RAM BGA112"));
    }

    #[test]
    fn test_trailing_commas_trimmed() {
        let mut rec = mapped_record();
        rec.set("RADIO", "ble,ble5,");
        rec.set("CRYPTO", "aes128,");
        let info = decoded("efm32gg890f512g-e1152");
        Assembler::new(".").finish(&mut rec, &info).unwrap();

        assert_eq!(rec.get("RADIO"), Some("ble,ble5"));
        assert_eq!(rec.get("CRYPTO"), Some("aes128"));
    }

    #[test]
    fn test_missing_depends_omits_field() {
        let dir = TempDir::new().unwrap();
        let mut rec = mapped_record();
        let info = decoded("efm32gg890f512g-e1152");
        Assembler::new(dir.path()).finish(&mut rec, &info).unwrap();

        assert!(!rec.contains("DEPENDS"));
    }

    #[test]
    fn test_depends_file_is_comma_joined() {
        let dir = TempDir::new().unwrap();
        let family_dir = dir.path().join("giant");
        fs::create_dir(&family_dir).unwrap();
        let mut file = fs::File::create(family_dir.join("depends")).unwrap();
        writeln!(file, "cmsis").unwrap();
        writeln!(file, "  emlib ").unwrap();

        let mut rec = mapped_record();
        let info = decoded("efm32gg890f512g-e1152");
        Assembler::new(dir.path()).finish(&mut rec, &info).unwrap();

        assert_eq!(rec.get("DEPENDS"), Some("cmsis,emlib"));
    }

    #[test]
    fn test_missing_required_field_is_fatal() {
        let mut incomplete = Record::new();
        incomplete.set("NAME", "efm32gg890f512");
        incomplete.set("CORE", "m4");
        let info = decoded("efm32gg890f512g-e1152");
        let err = Assembler::new(".").finish(&mut incomplete, &info).unwrap_err();
        assert!(matches!(err, ChipgenError::MissingColumn { .. }));
    }
}
