use pretty_assertions::assert_eq;
use wsum_bench::kernel::{scalar, vectorized, weighted_add, KernelKind, LANES};
use wsum_bench::KernelError;

#[test]
fn small_known_case_both_variants() {
    let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let b = [10.0f32, 20.0, 30.0, 40.0, 50.0];
    for kind in KernelKind::ALL {
        let r = weighted_add(kind, &a, 2.0, &b, 0.5).unwrap();
        assert_eq!(r, vec![7.0, 14.0, 21.0, 28.0, 35.0], "{}", kind);
    }
}

#[test]
fn empty_inputs_give_empty_output() {
    for kind in KernelKind::ALL {
        let r = weighted_add(kind, &[], 3.0, &[], -1.0).unwrap();
        assert!(r.is_empty(), "{}", kind);
    }
}

#[test]
fn tail_elements_use_scalar_fallback() {
    assert_eq!(LANES, 4);
    let a: Vec<f32> = (0..7).map(|i| i as f32 * 1.37 + 0.11).collect();
    let b: Vec<f32> = (0..7).map(|i| 9.5 - i as f32 * 0.73).collect();
    let (wa, wb) = (0.3f32, 0.52f32);
    let v = vectorized::weighted_add(&a, wa, &b, wb).unwrap();
    assert_eq!(v.len(), 7);
    for i in 4..7 {
        assert_eq!(v[i], scalar::weighted_one(a[i], wa, b[i], wb), "index {}", i);
        assert_ne!(v[i], 0.0);
    }
}

#[test]
fn mismatched_lengths_rejected() {
    let a = [1.0f32; 8];
    let b = [1.0f32; 5];
    for kind in KernelKind::ALL {
        let err = weighted_add(kind, &a, 1.0, &b, 1.0).unwrap_err();
        assert!(err.is_invalid_length(), "{}: {}", kind, err);
        match err {
            KernelError::InvalidLength { left, right } => {
                assert_eq!((left, right), (8, 5));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn ieee_specials_propagate() {
    let a = [f32::INFINITY, 1.0, f32::NAN, 2.0, f32::MAX];
    let b = [1.0f32, f32::NEG_INFINITY, 1.0, 0.0, f32::MAX];
    for kind in KernelKind::ALL {
        let r = weighted_add(kind, &a, 1.0, &b, 1.0).unwrap();
        assert_eq!(r[0], f32::INFINITY);
        assert_eq!(r[1], f32::NEG_INFINITY);
        assert!(r[2].is_nan());
        assert_eq!(r[3], 2.0);
        assert_eq!(r[4], f32::INFINITY);
    }
}

#[test]
fn kernel_kind_parses_and_labels() {
    assert_eq!("scalar".parse::<KernelKind>().unwrap(), KernelKind::Scalar);
    assert_eq!("Vectorized".parse::<KernelKind>().unwrap(), KernelKind::Vectorized);
    assert_eq!("simd".parse::<KernelKind>().unwrap(), KernelKind::Vectorized);
    assert!("asm".parse::<KernelKind>().is_err());
    assert_eq!(KernelKind::Scalar.label(), "Scalar");
    assert_eq!(KernelKind::Vectorized.to_string(), "Vectorized");
}
