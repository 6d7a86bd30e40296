use time::{Date, Month};

/// Upper bound on labelled x ticks; longer ranges label every n-th month.
const MAX_MONTH_TICKS: usize = 12;

/// First day of every month within `[first, last]`, thinned to at most
/// [`MAX_MONTH_TICKS`] entries.
pub fn month_ticks(first: Date, last: Date) -> Vec<Date> {
    let mut ticks = Vec::new();
    let mut cursor = first_of_month(first);
    if cursor < first {
        match next_month(cursor) {
            Some(next) => cursor = next,
            None => return ticks,
        }
    }

    while cursor <= last {
        ticks.push(cursor);
        match next_month(cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    let stride = ticks.len().div_ceil(MAX_MONTH_TICKS).max(1);
    ticks.into_iter().step_by(stride).collect()
}

pub fn month_label(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

/// First day of the following month; `None` past the last representable year.
fn next_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        month => (date.year(), month.next()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

/// Evenly spaced "nice" values (1, 2 or 5 times a power of ten) covering `[low, high]`.
pub fn value_ticks(low: f64, high: f64, target: usize) -> Vec<f64> {
    let span = high - low;
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return vec![low];
    }

    let raw_step = span / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|factor| factor * magnitude)
        .find(|candidate| *candidate >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let mut ticks = Vec::new();
    let mut value = (low / step).ceil() * step;
    while value <= high + step * 1e-9 {
        // Snap -0.0 and accumulated error so labels print cleanly.
        let snapped = (value / step).round() * step;
        ticks.push(if snapped == 0.0 { 0.0 } else { snapped });
        value += step;
    }
    ticks
}

/// Label with just enough decimals for the tick spacing.
pub fn value_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}
