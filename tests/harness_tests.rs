use keysort::bench::{self, SortViolation, TimingStats};
use keysort::data::{self, Code, MAX_CODES, Record};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn seeded_population(codes: usize, records: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let domain = data::generate_codes(codes, &mut rng);
    data::generate_records(&domain, records, &mut rng)
}

#[test]
fn test_verify_accepts_engine_output() {
    let population = seeded_population(50, 5_000, 7);
    let sorted = keysort::sort(&population);

    assert_eq!(bench::verify(&population, &sorted), Ok(()));
}

#[test]
fn test_verify_empty() {
    assert_eq!(bench::verify(&[], &[]), Ok(()));
}

#[test]
fn test_verify_rejects_out_of_order() {
    let input = vec![
        Record::new(Code::new(b'A', b'A'), 0),
        Record::new(Code::new(b'B', b'B'), 1),
    ];
    // B ahead of A: the keys decrease at index 1.
    let broken = vec![input[1].clone(), input[0].clone()];

    assert_eq!(
        bench::verify(&input, &broken),
        Err(SortViolation::KeyOrder { index: 1 })
    );
}

#[test]
fn test_verify_rejects_instability() {
    let input = vec![
        Record::new(Code::new(b'A', b'A'), 0),
        Record::new(Code::new(b'A', b'A'), 1),
    ];
    // Equal keys, arrival order flipped.
    let broken = vec![input[1].clone(), input[0].clone()];

    assert_eq!(
        bench::verify(&input, &broken),
        Err(SortViolation::Stability { index: 1 })
    );
}

#[test]
fn test_verify_rejects_lost_records() {
    let input = seeded_population(5, 100, 3);
    let mut truncated = keysort::sort(&input);
    truncated.truncate(97);

    assert_eq!(
        bench::verify(&input, &truncated),
        Err(SortViolation::ElementCount {
            expected: 100,
            actual: 97,
            missing: 3,
        })
    );
}

#[test]
fn test_verify_reports_duplicates_as_negative_missing() {
    let input = seeded_population(5, 10, 11);
    let mut padded = keysort::sort(&input);
    let last = padded[padded.len() - 1].clone();
    padded.push(last);

    assert_eq!(
        bench::verify(&input, &padded),
        Err(SortViolation::ElementCount {
            expected: 10,
            actual: 11,
            missing: -1,
        })
    );
}

#[test]
fn test_violation_messages_name_the_defect() {
    let lost = SortViolation::ElementCount {
        expected: 10,
        actual: 7,
        missing: 3,
    };
    assert_eq!(lost.to_string(), "lost 3 records: expected 10, found 7");

    let unordered = SortViolation::KeyOrder { index: 4 };
    assert!(unordered.to_string().contains("out of order"));

    let unstable = SortViolation::Stability { index: 2 };
    assert!(unstable.to_string().contains("unstable"));
}

#[test]
fn test_timing_stats_accumulate() {
    let mut stats = TimingStats::new();
    stats.record(Duration::from_millis(5));
    stats.record(Duration::from_millis(2));
    stats.record(Duration::from_millis(9));

    assert_eq!(stats.min(), Duration::from_millis(2));
    assert_eq!(stats.max(), Duration::from_millis(9));
    assert_eq!(stats.total(), Duration::from_millis(16));
    assert_eq!(stats.runs(), 3);
}

#[test]
fn test_timing_stats_report_format() {
    let mut stats = TimingStats::new();
    stats.record(Duration::from_millis(2));
    stats.record(Duration::from_millis(9));

    assert_eq!(stats.to_string(), "Min: 2\tMax: 9\tTotal: 11");
}

#[test]
fn test_timing_stats_empty_reports_zeros() {
    let stats = TimingStats::new();

    assert_eq!(stats.min(), Duration::ZERO);
    assert_eq!(stats.runs(), 0);
    assert_eq!(stats.to_string(), "Min: 0\tMax: 0\tTotal: 0");
}

#[test]
fn test_measure_baseline_runs_all_trials() {
    let population = seeded_population(10, 500, 5);

    let stats = bench::measure_baseline(&population, 7);

    assert_eq!(stats.runs(), 7);
    assert!(stats.min() <= stats.max());
    assert!(stats.max() <= stats.total());
}

#[test]
fn test_measure_engine_runs_all_trials() {
    let population = seeded_population(10, 500, 6);

    let stats = bench::measure_engine(&population, 7).expect("engine output verifies");

    assert_eq!(stats.runs(), 7);
    assert!(stats.max() <= stats.total());
}

#[test]
fn test_warmup_leaves_population_untouched() {
    let population = seeded_population(10, 200, 8);
    let before = population.clone();

    bench::warmup(&population, 3);

    assert_eq!(population, before);
}

#[test]
fn test_generate_codes_distinct() {
    let mut rng = rand::rng();
    let codes = data::generate_codes(50, &mut rng);

    assert_eq!(codes.len(), 50);
    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), 50);
}

#[test]
fn test_generate_codes_exhausts_full_domain() {
    let mut rng = rand::rng();
    let codes = data::generate_codes(MAX_CODES, &mut rng);

    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), MAX_CODES);
}

#[test]
#[should_panic(expected = "cannot draw")]
fn test_generate_codes_rejects_oversized_domain() {
    let mut rng = rand::rng();
    data::generate_codes(MAX_CODES + 1, &mut rng);
}

#[test]
fn test_generate_records_population() {
    let mut rng = StdRng::seed_from_u64(1);
    let codes = data::generate_codes(5, &mut rng);
    let records = data::generate_records(&codes, 1_000, &mut rng);

    assert_eq!(records.len(), 1_000);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.seq, i as u32);
        assert!(codes.contains(&record.code));
    }
}

#[test]
fn test_code_displays_as_letters() {
    let code = Code::new(b'A', b'Z');

    assert_eq!(code.to_string(), "AZ");
    assert_eq!(format!("{code:?}"), "Code(AZ)");
}
