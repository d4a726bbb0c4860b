//! Property-based tests for reassembly, escaping and stamping

#[cfg(test)]
mod tests {
    use crate::annotate::{
        split_lines, unescape_control, Clock, Escaper, ManualClock, SessionClock, TimestampPolicy,
    };
    use proptest::prelude::*;
    use std::time::Duration;

    fn no_newline_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 1..64)
    }

    // Property test: a chunk without newline is one partial line
    proptest! {
        #[test]
        fn test_newline_free_chunk_is_one_line(s in no_newline_bytes()) {
            let lines: Vec<&[u8]> = split_lines(&s).collect();
            prop_assert_eq!(lines, vec![&s[..]]);
        }
    }

    // Property test: terminating a chunk only terminates its single line
    proptest! {
        #[test]
        fn test_appending_newline_terminates_single_line(s in no_newline_bytes()) {
            let mut terminated = s.clone();
            terminated.push(b'\n');

            let lines: Vec<&[u8]> = split_lines(&terminated).collect();
            prop_assert_eq!(lines.len(), 1);
            prop_assert_eq!(lines[0], &terminated[..]);
        }
    }

    // Property test: reassembly never loses, adds or reorders bytes
    proptest! {
        #[test]
        fn test_lines_partition_the_chunk(chunk in prop::collection::vec(any::<u8>(), 0..256)) {
            let lines: Vec<&[u8]> = split_lines(&chunk).collect();
            let joined: Vec<u8> = lines.concat();
            prop_assert_eq!(&joined, &chunk);

            let newlines = chunk.iter().filter(|&&b| b == b'\n').count();
            let partial = usize::from(chunk.last().is_some_and(|&b| b != b'\n'));
            prop_assert_eq!(lines.len(), newlines + partial);
            prop_assert!(lines.iter().all(|l| !l.is_empty()));
        }
    }

    // Property test: control escaping is reversible and single-line
    proptest! {
        #[test]
        fn test_control_escape_round_trip(line in prop::collection::vec(any::<u8>(), 0..256)) {
            let escaped = Escaper::Control.escape(&line).unwrap();
            prop_assert_eq!(escaped.last(), Some(&b'\n'));
            prop_assert_eq!(escaped.iter().filter(|&&b| b == b'\n').count(), 1);
            prop_assert!(escaped.iter().all(|&b| b == b'\n' || b >= 0x20));
            prop_assert_eq!(unescape_control(&escaped).unwrap(), line);
        }
    }

    // Property test: unicode escaping emits only printable ASCII
    proptest! {
        #[test]
        fn test_unicode_escape_is_printable_ascii(text in any::<String>()) {
            let escaped = Escaper::Unicode.escape(text.as_bytes()).unwrap();
            let (last, body) = escaped.split_last().unwrap();
            prop_assert_eq!(*last, b'\n');
            prop_assert!(body.iter().all(|b| (b' '..=b'~').contains(b)));
        }
    }

    // Property test: absolute stamps never decrease
    proptest! {
        #[test]
        fn test_absolute_stamps_are_non_decreasing(
            gaps in prop::collection::vec(0u64..5_000, 1..50),
            from_launch in any::<bool>(),
        ) {
            let clock = ManualClock::new();
            let policy = TimestampPolicy::new(true, from_launch);
            let mut session = SessionClock::new(policy, clock.now());
            let mut last = Duration::ZERO;

            for gap in gaps {
                clock.advance(Duration::from_millis(gap));
                let stamp = session.stamp_chunk(clock.now());
                prop_assert!(stamp.first >= last);
                prop_assert_eq!(stamp.rest, stamp.first);
                last = stamp.first;
            }
        }
    }

    // Property test: relative stamps sum to the time since the first chunk
    proptest! {
        #[test]
        fn test_relative_stamps_sum_to_elapsed(gaps in prop::collection::vec(0u64..5_000, 1..50)) {
            let clock = ManualClock::new();
            let mut session = SessionClock::new(TimestampPolicy::default(), clock.now());
            let mut total = Duration::ZERO;

            for (i, gap) in gaps.iter().enumerate() {
                clock.advance(Duration::from_millis(*gap));
                let stamp = session.stamp_chunk(clock.now());
                if i == 0 {
                    prop_assert_eq!(stamp.first, Duration::ZERO);
                }
                prop_assert_eq!(stamp.rest, Duration::ZERO);
                total += stamp.first;
            }

            let since_first: u64 = gaps.iter().skip(1).sum();
            prop_assert_eq!(total, Duration::from_millis(since_first));
        }
    }
}
