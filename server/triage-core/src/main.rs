//! Binary entrypoint: read one incident log from stdin, write the
//! normalized IncidentDraft as JSON to stdout.
//!
//! Default mode runs the heuristic matchers; `--structured` takes the input
//! as a record-shaped log (CSV header + body) and parses it literally.
//! Exits non-zero only on I/O failure — normalization itself cannot fail.

use std::io::{self, Read, Write};
use std::process;

use triage_core::{normalize, parse_structured_log};

fn main() {
  let mut structured = false;
  for arg in std::env::args().skip(1) {
    match arg.as_str() {
      "--structured" => structured = true,
      "-h" | "--help" => {
        eprintln!("usage: triage-core [--structured] < logfile");
        return;
      }
      other => {
        eprintln!("triage-core: unknown argument: {}", other);
        process::exit(2);
      }
    }
  }

  let mut text = String::new();
  if let Err(e) = io::stdin().read_to_string(&mut text) {
    eprintln!("triage-core: read error: {}", e);
    process::exit(1);
  }

  let draft = if structured {
    parse_structured_log(&text)
  } else {
    normalize(&text)
  };

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if let Err(e) = serde_json::to_writer_pretty(&mut out, &draft) {
    eprintln!("triage-core: write error: {}", e);
    process::exit(1);
  }
  let _ = writeln!(out);
}
