//! Alignment Property Test Suite
//!
//! Validates the structural and scoring properties every global alignment must
//! satisfy, plus the golden vectors that pin down the tie-break order.

use nw_align::alignment::scoring::PairScoreTable;
use nw_align::{AlignError, Alignment, NeedlemanWunsch, ScoringScheme, Sequence};

fn seq(s: &str) -> Sequence {
    Sequence::new(s).expect("valid test sequence")
}

fn align(a: &str, b: &str) -> Alignment {
    NeedlemanWunsch::default()
        .align(&seq(a), &seq(b))
        .expect("alignment within limits")
}

fn ungapped(s: &str) -> String {
    s.replace('-', "")
}

const PAIRS: &[(&str, &str)] = &[
    ("ATCGT", "ACGT"),
    ("GATTACA", "GCATGCU"),
    ("AGTACGCA", "TATGC"),
    ("GTATCC", "AGCAC"),
    ("ACACACTA", "AGCACACA"),
    ("TTTT", "AAAA"),
    ("A", ""),
    ("", "CCG"),
    ("", ""),
];

/// Aligned strings always have equal length
#[test]
fn test_equal_aligned_lengths() {
    for &(a, b) in PAIRS {
        let aln = align(a, b);
        assert_eq!(
            aln.aligned_a.len(),
            aln.aligned_b.len(),
            "Length mismatch for {a}/{b}"
        );
    }
}

/// Removing gaps reconstructs each input exactly
#[test]
fn test_gap_removal_reconstructs_inputs() {
    for &(a, b) in PAIRS {
        let aln = align(a, b);
        assert_eq!(ungapped(&aln.aligned_a), a);
        assert_eq!(ungapped(&aln.aligned_b), b);
    }
}

/// The reported score equals the score of the reported alignment
#[test]
fn test_score_matches_alignment_columns() {
    let scheme = ScoringScheme::default();
    for &(a, b) in PAIRS {
        let aln = align(a, b);
        let recomputed: i32 = aln
            .aligned_a
            .bytes()
            .zip(aln.aligned_b.bytes())
            .map(|(x, y)| {
                if x == b'-' || y == b'-' {
                    scheme.gap_penalty
                } else {
                    scheme.pairscore(x, y)
                }
            })
            .sum();
        assert_eq!(recomputed, aln.score, "Score mismatch for {a}/{b}");
    }
}

/// Swapping the inputs never changes the optimal score
#[test]
fn test_score_symmetry() {
    for &(a, b) in PAIRS {
        assert_eq!(align(a, b).score, align(b, a).score, "{a}/{b}");
    }
}

/// Without co-optimal ties the swapped alignment is the transpose
#[test]
fn test_transposed_alignment() {
    for (a, b) in [("ATCGT", "ACGT"), ("GATTACA", "GCATGCU")] {
        let forward = align(a, b);
        let reverse = align(b, a);
        assert_eq!(forward.aligned_a, reverse.aligned_b);
        assert_eq!(forward.aligned_b, reverse.aligned_a);
    }
}

/// Self-alignment is gap-free and scores one match reward per symbol
#[test]
fn test_self_alignment() {
    let scheme = ScoringScheme::new(3, -1, -2).unwrap();
    let aligner = NeedlemanWunsch::new(scheme);
    for text in ["A", "GATTACA", "ACGTNRYKM"] {
        let s = seq(text);
        let aln = aligner.align(&s, &s).unwrap();
        assert_eq!(aln.aligned_a, text);
        assert_eq!(aln.aligned_b, text);
        assert_eq!(aln.score, 3 * i32::try_from(text.len()).unwrap());
    }
}

/// Aligning against an empty sequence gives an all-gap row
#[test]
fn test_empty_against_sequence() {
    let aln = align("", "GATTACA");
    assert_eq!(aln.aligned_a, "-------");
    assert_eq!(aln.aligned_b, "GATTACA");
    assert_eq!(aln.score, 7 * -2);
}

/// Golden vectors for the default scheme (1, -1, -2)
#[test]
fn test_golden_vectors() {
    let cases = [
        ("ATCGT", "ACGT", "ATCGT", "A-CGT", 2),
        ("GATTACA", "GCATGCU", "GATTACA", "GCATGCU", -1),
        ("AGTACGCA", "TATGC", "AGTACGCA", "--TATGC-", -3),
        ("GTATCC", "AGCAC", "-GTATCC", "AGCA--C", -4),
        ("AGCAC", "GTATCC", "--AGCAC", "GTATC-C", -4),
    ];

    for (a, b, expected_a, expected_b, score) in cases {
        let aln = align(a, b);
        assert_eq!(aln.aligned_a, expected_a, "{a}/{b}");
        assert_eq!(aln.aligned_b, expected_b, "{a}/{b}");
        assert_eq!(aln.score, score, "{a}/{b}");
    }
}

/// Repeated calls give identical results
#[test]
fn test_idempotence() {
    let aligner = NeedlemanWunsch::default();
    let (a, b) = (seq("AGTACGCA"), seq("TATGC"));
    let first = aligner.align(&a, &b).unwrap();
    for _ in 0..5 {
        assert_eq!(aligner.align(&a, &b).unwrap(), first);
    }
}

/// One aligner can be shared across threads
#[test]
fn test_shared_across_threads() {
    let aligner = NeedlemanWunsch::default();
    let expected = align("GATTACA", "GCATGCU");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| aligner.align(&seq("GATTACA"), &seq("GCATGCU")).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// The materialized pair-score table agrees with the scheme
#[test]
fn test_pair_score_table_matches_pairscore() {
    let scheme = ScoringScheme::default();
    let (a, b) = (seq("GATTACA"), seq("GCATGCU"));
    let table = PairScoreTable::new(&a, &b, &scheme);

    for (i, &x) in a.as_bytes().iter().enumerate() {
        for (j, &y) in b.as_bytes().iter().enumerate() {
            assert_eq!(table.get(i, j), scheme.pairscore(x, y));
        }
    }
}

/// Oversized inputs fail before allocation instead of returning partial results
#[test]
fn test_matrix_limit() {
    let long = seq(&"ACGT".repeat(5_000));
    assert!(matches!(
        NeedlemanWunsch::default().align(&long, &long),
        Err(AlignError::MatrixTooLarge { .. })
    ));
}
