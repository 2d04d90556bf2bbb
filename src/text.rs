//! Time and date labels

use core::fmt;

use chrono::{Datelike, Timelike};

/// Room for `"HH:MM"` plus slack
pub const TIME_BUF_LEN: usize = 8;
/// Room for the longest weekday abbreviation, a space and two digits
pub const DATE_BUF_LEN: usize = 10;

const SCRATCH_LEN: usize = 32;

/// Language of the weekday abbreviations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Locale {
    #[default]
    English,
    German,
}

impl Locale {
    fn weekdays(self) -> &'static [&'static str; 7] {
        match self {
            Locale::English => &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            Locale::German => &["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
        }
    }

    /// Abbreviated weekday name
    pub fn weekday(self, weekday: chrono::Weekday) -> &'static str {
        self.weekdays()[weekday.num_days_from_monday() as usize]
    }
}

/// Fixed capacity text
///
/// Text that does not fit is cut at the last character boundary within
/// capacity.
#[derive(Clone, Copy)]
pub struct Label<const N: usize> {
    str_buf: [u8; N],
    len: usize,
}

impl<const N: usize> Label<N> {
    pub const fn new() -> Self {
        Self {
            str_buf: [0; N],
            len: 0,
        }
    }

    /// Replace the content, dropping whatever does not fit
    pub fn set(&mut self, text: &str) {
        let mut end = text.len().min(N);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.str_buf[..end].copy_from_slice(&text.as_bytes()[..end]);
        self.len = end;
    }

    pub fn as_str(&self) -> &str {
        // `set` only ever stores whole characters
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or_default()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    fn set_fmt(&mut self, args: fmt::Arguments) {
        let mut scratch = [0u8; SCRATCH_LEN];
        match format_no_std::show(&mut scratch, args) {
            Ok(text) => self.set(text),
            Err(_) => {
                warn!("label text does not fit the scratch buffer");
                self.len = 0;
            }
        }
    }
}

impl<const N: usize> Default for Label<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for Label<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for Label<N> {}

impl<const N: usize> fmt::Debug for Label<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq<&str> for Label<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Format the time as `"HH:MM"` in 24 hour style or `"H:MM"` in 12 hour style
pub fn format_time<T: Timelike>(time: &T, use_24h: bool) -> Label<TIME_BUF_LEN> {
    let mut label = Label::new();
    if use_24h {
        label.set_fmt(format_args!("{:02}:{:02}", time.hour(), time.minute()));
    } else {
        let (_, hour) = time.hour12();
        label.set_fmt(format_args!("{}:{:02}", hour, time.minute()));
    }
    label
}

/// Format the date as abbreviated weekday and day of month, e.g. `"Wed 5"`
pub fn format_date<T: Datelike>(date: &T, locale: Locale) -> Label<DATE_BUF_LEN> {
    let mut label = Label::new();
    label.set_fmt(format_args!(
        "{} {}",
        locale.weekday(date.weekday()),
        date.day()
    ));
    label
}
