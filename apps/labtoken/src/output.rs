use std::io::{self, Write};

use crate::defaults::{ENV_FILE, TOKEN_KEY};

/// Writes the banner followed by the `ACCESS_TOKEN=<token>` line.
pub fn write_token<W: Write>(mut w: W, token: &str) -> io::Result<()> {
    writeln!(w, "Generate a access token")?;
    writeln!(w)?;
    writeln!(w, "Copy this line into the {} file:", ENV_FILE)?;
    writeln!(w)?;
    writeln!(w, "{}={}", TOKEN_KEY, token)?;
    w.flush()
}
