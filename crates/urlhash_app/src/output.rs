use std::io::{self, Write};

use urlhash_engine::ResultEntry;

/// One `"<url>  <digest-or-error>"` line per entry, in the order given.
pub fn write_results<W: Write>(out: &mut W, entries: &[ResultEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}
