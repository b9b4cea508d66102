//! Scan-payload boundary.
//!
//! A decoded QR payload is an arbitrary string. It becomes a participant ID
//! only if it parses as an integer in 1..=100; anything else is optical
//! noise and is discarded without raising an error. The base anchor (ID 0)
//! is never accepted from a scan; it is set deliberately via `base`.

use crate::models::Participant;

pub fn parse_scan_payload(raw: &str) -> Option<Participant> {
    let id: u8 = raw.trim().parse().ok()?;

    match Participant::new(id) {
        Some(p) if !p.is_base_anchor() => Some(p),
        _ => None,
    }
}
