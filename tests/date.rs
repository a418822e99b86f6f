use ansi_sauce::{SauceDate, SauceInfo, SauceTrailer, encode};

#[test]
fn displays_sauce_date() {
    let d = SauceDate::new(2025, 11, 8);
    assert_eq!(d.to_string(), "2025/11/08");
}

#[test]
fn displays_out_of_range_year_fallback() {
    let d = SauceDate::new(12_345, 1, 2);
    assert_eq!(d.to_string(), "12345/01/02");
}

// from_bytes with a valid sequence
#[test]
fn parses_from_bytes_valid() {
    let bytes = b"20251108";
    let d = SauceDate::from_bytes(bytes).expect("should parse");
    assert_eq!(d.year, 2025);
    assert_eq!(d.month, 11);
    assert_eq!(d.day, 8);
}

// from_bytes rejects wrong length
#[test]
fn from_bytes_rejects_wrong_length() {
    assert!(SauceDate::from_bytes(b"2025110").is_none());
    assert!(SauceDate::from_bytes(b"202511080").is_none());
}

#[test]
fn from_bytes_rejects_non_digits() {
    assert!(SauceDate::from_bytes(b"A0B1C2D3").is_none());
    assert!(SauceDate::from_bytes(b"19XX0101").is_none());
    assert!(SauceDate::from_bytes(b"        ").is_none());
}

// Round-trip: write then parse
#[test]
fn round_trip_write_parse() {
    let original = SauceDate::new(1999, 12, 31);
    let mut buf = Vec::new();
    original.write(&mut buf).unwrap();
    assert_eq!(buf.len(), 8);
    assert_eq!(&buf, b"19991231");
    let reparsed = SauceDate::from_bytes(&buf).unwrap();
    assert_eq!(reparsed, original);
}

// Ensure write uses contiguous digits (differs from Display)
#[test]
fn write_format_differs_from_display() {
    let d = SauceDate::new(2025, 1, 2);
    let mut buf = Vec::new();
    d.write(&mut buf).unwrap();
    assert_eq!(d.to_string(), "2025/01/02");
    assert_eq!(&buf, b"20250102"); // no slashes
}

// largest year that fits the field
#[test]
fn displays_year_9999_edge() {
    let d = SauceDate::new(9_999, 12, 31);
    assert_eq!(d.to_string(), "9999/12/31");
}

// five digit years
#[test]
fn displays_year_10000_fallback() {
    let d = SauceDate::new(10_000, 1, 1);
    assert_eq!(d.to_string(), "10000/01/01"); // printed in full
}

#[test]
fn equality_check() {
    let a = SauceDate::new(2025, 11, 8);
    let b = SauceDate::new(2025, 11, 8);
    let c = SauceDate::new(2025, 11, 9);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_data() {
    let buf = b"1-991231";
    let invalid = SauceDate::from_bytes(buf);
    assert_eq!(invalid, None);
}

#[test]
fn sauce_string_clamps_out_of_range_values() {
    assert_eq!(SauceDate::new(12_345, 1, 2).to_sauce_string(), "99990102");
    assert_eq!(SauceDate::new(-5, 1, 2).to_sauce_string(), "00000102");
    assert_eq!(SauceDate::new(2025, 200, 1).to_sauce_string(), "20259901");
}

#[test]
fn parse_field_accepts_only_eight_digits() {
    assert_eq!(SauceDate::parse_field("19970401"), Some(SauceDate::new(1997, 4, 1)));
    assert_eq!(SauceDate::parse_field(""), None);
    assert_eq!(SauceDate::parse_field("1997"), None);
    assert_eq!(SauceDate::parse_field("1997-4-1"), None);
}

#[test]
fn invalid_trailer_date_is_absent_in_info() {
    let sauce = SauceTrailer {
        date: "19XX0101".to_string(),
        ..Default::default()
    };
    let info = SauceInfo::from_bytes(&encode(b"art", &sauce)).unwrap();
    assert_eq!(info.date(), None);
    assert_eq!(info.title(), "");
}

#[cfg(feature = "chrono")]
mod chrono_dates {
    use ansi_sauce::SauceDate;
    use chrono::NaiveDate;

    #[test]
    fn converts_valid_dates() {
        let date = NaiveDate::from_ymd_opt(1994, 8, 31).unwrap();
        let sauce: SauceDate = date.into();
        assert_eq!(sauce.to_sauce_string(), "19940831");
        assert_eq!(NaiveDate::try_from(sauce), Ok(date));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(SauceDate::new(2023, 2, 29).to_naive_date().is_none());
        assert!(NaiveDate::try_from(SauceDate::new(2024, 13, 1)).is_err());
    }
}
