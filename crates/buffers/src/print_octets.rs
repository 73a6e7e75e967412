//! Debug utility for printing octets as hex strings.

/// Formats a byte slice as a hex string for debugging.
///
/// At most `max` bytes are shown; the remainder is summarized.
///
/// ```
/// use cql_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x00, 0x00, 0x7f, 0xff], 16), "00 00 7f ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let Some((first, rest)) = octets.split_first() else {
        return String::new();
    };

    let mut result = format!("{first:02x}");
    for byte in rest.iter().take(max.saturating_sub(1)) {
        result.push_str(&format!(" {byte:02x}"));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats a byte slice as a hex string with default max of 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}

/// Formats a three-state wire value: `null`, `empty`, or its hex bytes.
///
/// ```
/// use cql_buffers::print_wire;
///
/// assert_eq!(print_wire(None), "null");
/// assert_eq!(print_wire(Some(&[])), "empty");
/// assert_eq!(print_wire(Some(&[0x00, 0x01])), "00 01");
/// ```
pub fn print_wire(p: Option<&[u8]>) -> String {
    match p {
        None => "null".to_owned(),
        Some([]) => "empty".to_owned(),
        Some(bytes) => print_octets_default(bytes),
    }
}
