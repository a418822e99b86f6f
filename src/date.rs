//! The `CCYYMMDD` date field of a SAUCE trailer.
//!
//! [`SauceTrailer`](crate::SauceTrailer) keeps the field as the text it
//! found, since real files carry anything from blanks to `"19XX0101"`.
//! `SauceDate` is the parsed form used by [`SauceInfo::date`](crate::SauceInfo::date)
//! and the builder. Calendar ranges are not checked unless the `chrono`
//! feature is enabled.
//!
//! ```
//! use ansi_sauce::SauceDate;
//!
//! let date = SauceDate::from_bytes(b"20260118").unwrap();
//! assert_eq!(date.to_string(), "2026/01/18");
//! assert_eq!(date.to_sauce_string(), "20260118");
//! assert!(SauceDate::from_bytes(b"19XX0101").is_none());
//! ```

/// A parsed SAUCE date. Fields are taken as stored; `13/40` is representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SauceDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl std::fmt::Display for SauceDate {
    /// `YYYY/MM/DD`; years beyond four digits are printed in full.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = if (0..10_000).contains(&self.year) { 4 } else { 0 };
        write!(f, "{:0width$}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl SauceDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        SauceDate { year, month, day }
    }

    /// Parses exactly eight ASCII digits. Month and day ranges are not
    /// checked.
    ///
    /// ```
    /// use ansi_sauce::SauceDate;
    ///
    /// assert_eq!(SauceDate::from_bytes(b"19940831"), Some(SauceDate::new(1994, 8, 31)));
    /// assert!(SauceDate::from_bytes(b"1994083").is_none());
    /// assert!(SauceDate::from_bytes(b"1994-8-31").is_none());
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let digits: &[u8; 8] = bytes.try_into().ok()?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let number = |range: std::ops::Range<usize>| {
            digits[range]
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
        };
        Some(SauceDate {
            year: number(0..4) as i32,
            month: number(4..6) as u8,
            day: number(6..8) as u8,
        })
    }

    /// The strict SAUCE wire format, `YYYYMMDD`.
    ///
    /// Years outside `0..=9999` do not fit the field and are clamped.
    ///
    /// ```
    /// use ansi_sauce::SauceDate;
    /// assert_eq!(SauceDate::new(1996, 4, 1).to_sauce_string(), "19960401");
    /// ```
    pub fn to_sauce_string(&self) -> String {
        format!(
            "{:04}{:02}{:02}",
            self.year.clamp(0, 9999),
            self.month.min(99),
            self.day.min(99)
        )
    }

    /// Parses a trailer's `date` field, logging a warning for anything that
    /// is not eight digits. An empty field is absent without a warning.
    pub fn parse_field(date: &str) -> Option<Self> {
        if date.is_empty() {
            return None;
        }
        let parsed = SauceDate::from_bytes(date.as_bytes());
        if parsed.is_none() {
            log::warn!("Invalid SAUCE date '{date}' - ignoring");
        }
        parsed
    }

    /// Writes [`to_sauce_string`](Self::to_sauce_string) to `writer`.
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> crate::Result<()> {
        writer
            .write_all(self.to_sauce_string().as_bytes())
            .map_err(|err| crate::SauceError::io_error("<date>", err))
    }

    /// The calendar date, `None` if it does not exist.
    ///
    /// ```
    /// # #[cfg(feature = "chrono")] {
    /// use ansi_sauce::SauceDate;
    ///
    /// assert!(SauceDate::new(1996, 2, 29).to_naive_date().is_some());
    /// assert!(SauceDate::new(1997, 2, 29).to_naive_date().is_none());
    /// # }
    /// ```
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for SauceDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        // month() and day() are at most 12 and 31
        SauceDate::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<SauceDate> for chrono::NaiveDate {
    type Error = ();

    /// Fails for dates outside the calendar, such as month 13.
    fn try_from(date: SauceDate) -> Result<Self, Self::Error> {
        date.to_naive_date().ok_or(())
    }
}
