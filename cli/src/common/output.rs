//! Result reporting.

/// The line printed for a finished scan.
pub fn describe(key: i64, found: Option<usize>) -> String {
    match found {
        Some(index) => format!("Key {} found at index {}", key, index),
        None => format!("Key {} not found", key),
    }
}

/// Print the result of a scan to stdout.
pub fn report(key: i64, found: Option<usize>) {
    println!("{}", describe(key, found));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_hit_and_miss() {
        assert_eq!(describe(55, Some(10)), "Key 55 found at index 10");
        assert_eq!(describe(7, None), "Key 7 not found");
    }
}
