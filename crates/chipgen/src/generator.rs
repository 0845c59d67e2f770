//! Generator facade and public API.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::assemble::Assembler;
use crate::decode::DecoderRing;
use crate::emit;
use crate::error::Result;
use crate::input::{MatrixParser, ParserConfig, SourceMetadata};
use crate::mapping::ColumnMap;

/// Core variant not supported by the downstream build system.
const UNSUPPORTED_CORE: &str = "m0+";

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Directory the per-family `depends` files are resolved under.
    pub deps_root: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            deps_root: PathBuf::from("."),
        }
    }
}

/// Summary of one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    /// Parts emitted.
    pub emitted: usize,
    /// Parts skipped (unsupported core variants).
    pub skipped: usize,
    /// Emitted part counts per family, in first-seen order.
    pub families: IndexMap<String, usize>,
    /// Metadata about the source matrix.
    pub source: SourceMetadata,
}

/// The matrix conversion engine.
///
/// Owns the static tables (column catalog, decoder ring) and drives the
/// parse → map → decode → assemble → emit pipeline row by row. Rows are
/// independent; emitted sections keep input row order.
pub struct Generator {
    parser: MatrixParser,
    columns: ColumnMap,
    ring: DecoderRing,
    assembler: Assembler,
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            parser: MatrixParser::with_config(config.parser),
            columns: ColumnMap::builtin(),
            ring: DecoderRing::builtin(),
            assembler: Assembler::new(config.deps_root),
        }
    }

    /// Convert a matrix file, writing info sections to `out`.
    pub fn generate(&self, path: impl AsRef<Path>, out: &mut impl Write) -> Result<GenerateSummary> {
        let (table, source) = self.parser.parse_file(path)?;

        let mut emitted = 0;
        let mut skipped = 0;
        let mut families: IndexMap<String, usize> = IndexMap::new();

        for (row_idx, cells) in table.rows.iter().enumerate() {
            let mut record = self.columns.map_row(&table.headers, cells, row_idx)?;

            if record.require("CORE")? == UNSUPPORTED_CORE {
                skipped += 1;
                continue;
            }

            let name = record.require("NAME")?.to_string();
            let info = self.ring.decode(&name)?;
            self.assembler.finish(&mut record, &info)?;

            emit::write_record(out, &record)?;
            *families.entry(info.family.id().to_string()).or_insert(0) += 1;
            emitted += 1;
        }

        Ok(GenerateSummary {
            emitted,
            skipped,
            families,
            source,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
