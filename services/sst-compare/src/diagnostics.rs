//! Operator listings printed before processing.
//!
//! These go to stdout, separate from the tracing output on stderr.

use std::fmt::Write as _;

use gmi_reader::GmiDaily;

const INDENT: &str = "     ";

/// Variable names with their long names.
pub fn variable_listing(daily: &GmiDaily) -> String {
    let mut out = String::from("\nVariables:\n");
    for var in daily.variables() {
        let _ = writeln!(out, "{INDENT}{} : {}", var.name, var.long_name);
    }
    out
}

/// Valid range and units of every variable.
pub fn valid_range_listing(daily: &GmiDaily) -> String {
    let mut out = String::from("\nValid min and max and units:\n");
    for var in daily.variables() {
        let _ = writeln!(
            out,
            "{INDENT}{} : {:?} to {:?} ( {} )",
            var.name, var.valid_min, var.valid_max, var.units
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmi_reader::{decode_payload, GmiLayout};

    fn tiny_daily() -> GmiDaily {
        let layout = GmiLayout::new(2, 2, 4);
        let payload = vec![0u8; layout.payload_len()];
        decode_payload(&payload, layout, -999.0, "tiny.bin".into()).unwrap()
    }

    #[test]
    fn test_variable_listing() {
        let listing = variable_listing(&tiny_daily());
        assert!(listing.starts_with("\nVariables:\n"));
        assert!(listing.contains("\n     sst : Sea Surface Temperature\n"));
        assert!(listing.contains("     longitude : Grid Cell Center Longitude"));
    }

    #[test]
    fn test_valid_range_listing() {
        let listing = valid_range_listing(&tiny_daily());
        assert!(listing.contains("     sst : -3.0 to 34.5 ( deg Celsius )"));
        assert!(listing.contains("     land : 0.0 to 1.0 ( 1 )"));
    }
}
