//! Password output to stdout.

use std::io::Write;

use zeroize::Zeroize;

/// Write the password and a trailing newline to stdout, then zeroize the
/// buffers. Write errors (e.g. closed pipe) are ignored.
pub fn write_line(mut password: String) {
    let mut buf = Vec::with_capacity(password.len() + 1);
    buf.extend_from_slice(password.as_bytes());
    buf.push(b'\n');

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(&buf);
    let _ = out.flush();

    buf.zeroize();
    password.zeroize();
}
