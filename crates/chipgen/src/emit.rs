//! Record emission.
//!
//! Each part becomes one `[name]` section with tab-indented `KEY=value`
//! lines, in record insertion order, separated by a blank line. Output is
//! a pure function of the record, which keeps repeated runs byte-identical.

use std::io::Write;

use crate::error::Result;
use crate::record::Record;

/// Write one record as an info section.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    let name = record.require("NAME")?;
    writeln!(out, "[{name}]")?;
    for (key, value) in record.iter() {
        if key == "NAME" {
            continue;
        }
        writeln!(out, "\t{key}={value}")?;
    }
    writeln!(out)?;
    Ok(())
}
