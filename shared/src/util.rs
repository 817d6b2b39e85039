/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format an order number from the current local date and a per-session
/// counter, e.g. `ZAM-20260807-0001`.
///
/// The counter starts at 1 for the first order of a session; numbers are
/// never reused within a run.
pub fn order_number(count: u32) -> String {
    let date_str = chrono::Local::now().format("%Y%m%d").to_string();
    format!("ZAM-{}-{:04}", date_str, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_carries_date_and_counter() {
        let n = order_number(7);
        assert!(n.starts_with("ZAM-"));
        assert!(n.ends_with("-0007"));
        // ZAM- + YYYYMMDD + -NNNN
        assert_eq!(n.len(), "ZAM-".len() + 8 + "-0007".len());
    }
}
