//! End-to-end properties of the bracket walk, checked by rescanning the
//! emitted strings with an independent matcher.

mod common;

use brackgen::{Alphabet, BracketGenerator, ConfigError, GeneratorConfig, Mode, SENTINEL};
use common::{is_balanced, scan};

fn seeded(min_length: i32, min_imbrication: i32, seed: u64) -> BracketGenerator {
    BracketGenerator::new(GeneratorConfig::new(min_length, min_imbrication).with_seed(seed))
}

#[test]
fn zero_threshold_yields_sentinel_in_every_configuration() {
    let generator = BracketGenerator::new(GeneratorConfig::new(0, 0).with_seed(5));
    for mode in [Mode::Length, Mode::Imbrication] {
        for alphabet in [Alphabet::Simple, Alphabet::MultiType] {
            for correct in [true, false] {
                assert_eq!(
                    generator.generate(mode, alphabet, correct).unwrap(),
                    SENTINEL
                );
            }
        }
    }
}

#[test]
fn good_length_output_is_balanced_and_long_enough() {
    for seed in 0..100 {
        for alphabet in [Alphabet::Simple, Alphabet::MultiType] {
            let generator = seeded(12, 0, seed);
            let out = generator.generate(Mode::Length, alphabet, true).unwrap();
            assert!(out.len() >= 12, "seed {}: {:?}", seed, out);
            assert!(is_balanced(&out), "seed {}: {:?}", seed, out);
        }
    }
}

#[test]
fn good_imbrication_output_is_balanced_and_reaches_the_depth() {
    for seed in 0..100 {
        for alphabet in [Alphabet::Simple, Alphabet::MultiType] {
            let generator = seeded(0, 3, seed);
            let out = generator
                .generate(Mode::Imbrication, alphabet, true)
                .unwrap();
            let scan = scan(&out);
            assert!(is_balanced(&out), "seed {}: {:?}", seed, out);
            assert!(scan.max_depth >= 3, "seed {}: {:?}", seed, out);
        }
    }
}

#[test]
fn bad_output_is_never_balanced() {
    for seed in 0..100 {
        for mode in [Mode::Length, Mode::Imbrication] {
            for alphabet in [Alphabet::Simple, Alphabet::MultiType] {
                let generator = seeded(8, 3, seed);
                let out = generator.generate(mode, alphabet, false).unwrap();
                let scan = scan(&out);
                assert!(
                    scan.open_at_end > 0,
                    "seed {} mode {:?}: {:?}",
                    seed,
                    mode,
                    out
                );
            }
        }
    }
}

#[test]
fn bad_length_output_still_meets_the_length_threshold() {
    for seed in 0..100 {
        let generator = seeded(8, 0, seed);
        let out = generator
            .generate(Mode::Length, Alphabet::Simple, false)
            .unwrap();
        assert!(out.len() >= 8, "seed {}: {:?}", seed, out);
    }
}

#[test]
fn bad_imbrication_output_still_reaches_the_depth_threshold() {
    for seed in 0..100 {
        let generator = seeded(0, 3, seed);
        let out = generator
            .generate(Mode::Imbrication, Alphabet::MultiType, false)
            .unwrap();
        assert!(scan(&out).max_depth >= 3, "seed {}: {:?}", seed, out);
    }
}

#[test]
fn multi_type_closers_never_mismatch_even_in_bad_output() {
    for seed in 0..200 {
        for mode in [Mode::Length, Mode::Imbrication] {
            for correct in [true, false] {
                let generator = seeded(15, 4, seed);
                let out = generator.generate(mode, Alphabet::MultiType, correct).unwrap();
                assert!(
                    !scan(&out).mismatch,
                    "cross-kind close for seed {}: {:?}",
                    seed,
                    out
                );
            }
        }
    }
}

#[test]
fn identical_parameters_and_seed_reproduce_identical_bytes() {
    for seed in [0, 1, 42, u64::MAX] {
        for mode in [Mode::Length, Mode::Imbrication] {
            for alphabet in [Alphabet::Simple, Alphabet::MultiType] {
                for correct in [true, false] {
                    let a = seeded(10, 3, seed).generate(mode, alphabet, correct).unwrap();
                    let b = seeded(10, 3, seed).generate(mode, alphabet, correct).unwrap();
                    assert_eq!(a.as_bytes(), b.as_bytes());
                }
            }
        }
    }
}

#[test]
fn unseeded_generation_terminates_and_respects_labels() {
    let generator = BracketGenerator::new(GeneratorConfig::new(10, 3));
    let good = generator
        .generate(Mode::Length, Alphabet::Simple, true)
        .unwrap();
    assert!(is_balanced(&good));
    let bad = generator
        .generate(Mode::Imbrication, Alphabet::Simple, false)
        .unwrap();
    assert!(!is_balanced(&bad));
}

#[test]
fn negative_threshold_fails_before_emitting_anything() {
    let generator = BracketGenerator::new(GeneratorConfig::new(5, -2));
    let err = generator
        .generate(Mode::Imbrication, Alphabet::Simple, true)
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::NegativeThreshold {
            field: "min_imbrication",
            value: -2,
        }
    );
    // The inactive threshold is not consulted.
    assert!(generator.generate(Mode::Length, Alphabet::Simple, true).is_ok());
}

#[test]
fn generators_on_separate_threads_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            std::thread::spawn(move || {
                seeded(10, 0, seed)
                    .generate(Mode::Length, Alphabet::Simple, true)
                    .unwrap()
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let local = seeded(10, 0, seed as u64)
            .generate(Mode::Length, Alphabet::Simple, true)
            .unwrap();
        assert_eq!(threaded, local);
    }
}
