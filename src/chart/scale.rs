//! Continuous scales (linear, square-root, time)

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

/// Linear map from a domain interval onto a range interval
///
/// A degenerate domain maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn invert(&self, value: f64) -> f64 {
        LinearScale::new(self.range, self.domain).map(value)
    }
}

/// Square-root scale (area-proportional radii)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    inner: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new((domain.0.sqrt(), domain.1.sqrt()), range),
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        self.inner.map(value.sqrt())
    }
}

/// Linear scale over instants
///
/// Offsets from the domain start are mapped at nanosecond precision, and
/// the range ends invert to the exact domain endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    /// Milliseconds since `start` → range
    inner: LinearScale,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

fn millis(delta: TimeDelta) -> f64 {
    delta
        .num_nanoseconds()
        .map_or(delta.num_milliseconds() as f64, |nanos| nanos as f64 / 1e6)
}

impl TimeScale {
    /// Instants produced by [`TimeScale::invert`] carry the offset of `end`
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        range: (f64, f64),
    ) -> Self {
        Self {
            inner: LinearScale::new((0.0, millis(end - start)), range),
            start: start.with_timezone(end.offset()),
            end,
        }
    }

    /// Scale over the extent of `instants`, or `None` when there are none
    pub fn from_extent<I>(instants: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<FixedOffset>>,
    {
        let mut iter = instants.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(Self::new(min, max, range))
    }

    pub fn map<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        self.inner
            .map(millis(instant.clone().signed_duration_since(self.start)))
    }

    pub fn invert(&self, value: f64) -> DateTime<FixedOffset> {
        let (r0, r1) = self.inner.range();
        if value == r0 {
            return self.start;
        }
        if value == r1 {
            return self.end;
        }
        let offset = self.inner.invert(value);
        if !offset.is_finite() {
            return self.end;
        }
        self.start
            .checked_add_signed(TimeDelta::nanoseconds((offset * 1e6).round() as i64))
            .unwrap_or(self.end)
    }

    /// Domain as instants (start, end)
    pub fn extent(&self) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        (self.start, self.end)
    }
}

/// Hour axis tick label ("00:00" … "23:00", 24 wraps to "00:00")
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour % 24)
}
