//! Chipgen: chipset matrix converter.
//!
//! Converts a vendor-supplied CSV matrix of microcontroller part variants
//! into per-part key/value info records for a downstream build system.
//! Single pass: parse the matrix, map each column through its transform
//! rule, decode the part name against the family ring, assemble the final
//! record, emit it as a `[name]` section.
//!
//! # Example
//!
//! ```no_run
//! use chipgen::Generator;
//!
//! let generator = Generator::new();
//! let mut out = std::io::stdout();
//! let summary = generator.generate("matrix.csv", &mut out).unwrap();
//!
//! eprintln!("{} parts, {} skipped", summary.emitted, summary.skipped);
//! ```

pub mod assemble;
pub mod decode;
pub mod emit;
pub mod error;
pub mod input;
pub mod mapping;
pub mod record;

mod generator;

pub use decode::{DecodedInfo, DecoderRing, Family, TempGrade};
pub use error::{ChipgenError, Result};
pub use generator::{GenerateSummary, Generator, GeneratorConfig};
pub use input::{MatrixParser, MatrixTable, ParserConfig, SourceMetadata};
pub use mapping::{ColumnMap, ColumnRule};
pub use record::Record;
