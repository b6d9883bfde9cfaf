//! Dashboard arithmetic: range selectors, growth percentages,
//! mutual-match counting and daily bucket filling. Everything here is
//! pure; the handlers in `dashboard` wire these onto the store.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Previous-period matches and pending payments are approximated from
/// the current figures with fixed offsets instead of being computed
/// from history. TODO: persist daily snapshot rows and diff those.
pub const PREV_MATCHES_OFFSET: i64 = 50;
pub const PREV_PAYMENTS_OFFSET: i64 = 2;

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Map a symbolic range selector onto a concrete interval ending at
/// `now`. Unrecognized selectors fall back to the last 7 days.
pub fn resolve_range(selector: &str, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.date_naive();
    match selector {
        "today" => (midnight(today), now),
        "yesterday" => {
            let start = midnight(today) - Duration::days(1);
            (start, start + Duration::days(1))
        }
        "last30" => (now - Duration::days(30), now),
        "last90" => (now - Duration::days(90), now),
        "thisMonth" => (midnight(first_of_month(today)), now),
        "lastMonth" => {
            let last_of_prev = first_of_month(today)
                .pred_opt()
                .expect("calendar extends before today");
            let start = first_of_month(last_of_prev);
            // Day 28 plus four days; overshoots into the following
            // month for short months.
            let end = midnight(start.with_day(28).expect("every month has a 28th"))
                + Duration::days(4);
            (midnight(start), end)
        }
        "thisYear" => {
            let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                .expect("January 1st exists in every year");
            (midnight(jan1), now)
        }
        _ => (now - Duration::days(7), now),
    }
}

/// Period-over-period growth as the dashboard shows it: a previous
/// count of zero reads as +100% when anything exists now.
pub fn growth(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        if current > 0 { 100.0 } else { 0.0 }
    } else {
        let pct = (current - previous) as f64 / previous as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// Count mutual pairs in the directed like graph. Each matched pair is
/// discovered once from either end, hence the halving.
pub fn count_mutual_matches(edges: &[(i64, i64)]) -> i64 {
    let mut liked_by: HashMap<i64, HashSet<i64>> = HashMap::new();
    for &(liker, liked) in edges {
        liked_by.entry(liker).or_default().insert(liked);
    }

    let mut ordered = 0i64;
    for (liker, targets) in &liked_by {
        for target in targets {
            if liked_by.get(target).is_some_and(|back| back.contains(liker)) {
                ordered += 1;
            }
        }
    }
    ordered / 2
}

/// Chart pairs for the gender breakdown: null and empty genders group
/// under "Not specified", labels are capitalized and sorted so the
/// legend order is stable across reloads.
pub fn gender_chart(rows: Vec<(Option<String>, i64)>) -> (Vec<String>, Vec<i64>) {
    let mut pairs: Vec<(String, i64)> = rows
        .into_iter()
        .map(|(gender, count)| {
            let label = match gender.as_deref() {
                None | Some("") => "Not specified".to_string(),
                Some(g) => capitalize(g),
            };
            (label, count)
        })
        .collect();
    pairs.sort();
    pairs.into_iter().unzip()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// One bucket per calendar day, oldest first, ending with `today`.
/// Days without registrations appear with a zero count; `counts` is
/// keyed by `YYYY-MM-DD`.
pub fn fill_daily_buckets(
    days: u32,
    today: NaiveDate,
    counts: &HashMap<String, i64>,
) -> (Vec<String>, Vec<i64>) {
    let mut labels = Vec::with_capacity(days as usize);
    let mut data = Vec::with_capacity(days as usize);
    for offset in (0..days as i64).rev() {
        let day = today - Duration::days(offset);
        let key = day.format("%Y-%m-%d").to_string();
        labels.push(day.format("%b %d").to_string());
        data.push(counts.get(&key).copied().unwrap_or(0));
    }
    (labels, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn last7_is_exactly_seven_days_back() {
        let now = at(2026, 8, 5, 14, 30, 0);
        let (start, end) = resolve_range("last7", now);
        assert_eq!(start, now - Duration::days(7));
        assert_eq!(end, now);
    }

    #[test]
    fn unrecognized_selector_falls_back_to_last7() {
        let now = at(2026, 8, 5, 14, 30, 0);
        assert_eq!(resolve_range("fortnight", now), resolve_range("last7", now));
    }

    #[test]
    fn today_starts_at_midnight() {
        let now = at(2026, 8, 5, 14, 30, 0);
        let (start, end) = resolve_range("today", now);
        assert_eq!(start, at(2026, 8, 5, 0, 0, 0));
        assert_eq!(end, now);
    }

    #[test]
    fn yesterday_covers_the_previous_whole_day() {
        let now = at(2026, 8, 5, 14, 30, 0);
        let (start, end) = resolve_range("yesterday", now);
        assert_eq!(start, at(2026, 8, 4, 0, 0, 0));
        assert_eq!(end, at(2026, 8, 5, 0, 0, 0));
    }

    #[test]
    fn this_month_and_year_start_on_the_first() {
        let now = at(2026, 8, 5, 14, 30, 0);
        assert_eq!(resolve_range("thisMonth", now).0, at(2026, 8, 1, 0, 0, 0));
        assert_eq!(resolve_range("thisYear", now).0, at(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn last_month_uses_the_day_28_heuristic() {
        // February: the heuristic end lands on March 4th, past the real
        // month end. That overshoot is the documented behavior.
        let now = at(2026, 3, 15, 12, 0, 0);
        let (start, end) = resolve_range("lastMonth", now);
        assert_eq!(start, at(2026, 2, 1, 0, 0, 0));
        assert_eq!(end, at(2026, 3, 4, 0, 0, 0));

        // January from February, crossing the year boundary
        let (start, end) = resolve_range("lastMonth", at(2026, 1, 10, 9, 0, 0));
        assert_eq!(start, at(2025, 12, 1, 0, 0, 0));
        assert_eq!(end, at(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn growth_handles_zero_baselines() {
        assert_eq!(growth(0, 0), 0.0);
        assert_eq!(growth(5, 0), 100.0);
        assert_eq!(growth(150, 100), 50.0);
        assert_eq!(growth(50, 100), -50.0);
    }

    #[test]
    fn growth_rounds_to_two_decimals() {
        assert_eq!(growth(1, 3), -66.67);
        assert_eq!(growth(2, 3), -33.33);
    }

    #[test]
    fn one_mutual_pair_counts_once() {
        let edges = [(1, 2), (2, 1), (1, 3)];
        assert_eq!(count_mutual_matches(&edges), 1);
    }

    #[test]
    fn match_counting_edge_cases() {
        assert_eq!(count_mutual_matches(&[]), 0);
        assert_eq!(count_mutual_matches(&[(1, 2), (1, 3), (2, 3)]), 0);
        assert_eq!(
            count_mutual_matches(&[(1, 2), (2, 1), (3, 4), (4, 3)]),
            2
        );
    }

    #[test]
    fn gender_chart_labels_and_order() {
        let rows = vec![
            (Some("male".to_string()), 10),
            (None, 3),
            (Some("FEMALE".to_string()), 12),
        ];
        let (labels, data) = gender_chart(rows);
        assert_eq!(labels, vec!["Female", "Male", "Not specified"]);
        assert_eq!(data, vec![12, 10, 3]);
    }

    #[test]
    fn buckets_are_zero_filled_and_chronological() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let mut counts = HashMap::new();
        counts.insert("2026-08-05".to_string(), 1);

        let (labels, data) = fill_daily_buckets(3, today, &counts);
        assert_eq!(labels, vec!["Aug 03", "Aug 04", "Aug 05"]);
        assert_eq!(data, vec![0, 0, 1]);
    }
}
