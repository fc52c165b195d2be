#![expect(unused_crate_dependencies, reason = "outer test module")]

use std::thread;

use num_bigint::BigInt;
use rand::{rngs::StdRng, SeedableRng};

use nplus_isqrt::integer_sqrt;
use nplus_test_utils::{family::random_operand, reference::is_floor_sqrt};

/// Calls on different threads share nothing, their results match serial calls.
#[test]
fn concurrent_calls() {
    let mut rng = StdRng::seed_from_u64(99);
    let operands: Vec<BigInt> = (0..256)
        .map(|_| random_operand(&mut rng, 1..5000))
        .collect();

    let serial: Vec<BigInt> = operands
        .iter()
        .map(|x| integer_sqrt(x).unwrap())
        .collect();

    let parallel: Vec<BigInt> = thread::scope(|s| {
        let handles: Vec<_> = operands
            .chunks(16)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|x| integer_sqrt(x).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(serial, parallel);
    for (x, root) in operands.iter().zip(&parallel) {
        assert!(is_floor_sqrt(x, root));
    }
}
