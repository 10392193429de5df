use nodal::interpolation::linear::{interpolate, LinearCfg};
use nodal::interpolation::errors::InterpolationError;

type NodalResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn report_metadata() -> NodalResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "linear");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.lookups.total(), 2);
    assert_vec_close(&rep.evaluated, &[0.5, 2.5]);
    Ok(())
}

#[test]
fn exact_hits() -> NodalResult {
    let x = [0.0, 1.0, 2.0, 4.0];
    let y = [0.0, 1.0, 1.5, 3.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;
    let rep = interpolate(cfg)?;
    assert_eq!(rep.evaluated, y.to_vec());
    Ok(())
}

#[test]
fn out_of_bounds_without_extrapolation() {
    let x = [0.0, 1.0];
    let y = [1.0, 2.0];

    for xq in [-0.1, 1.1] {
        let x_eval = [xq];
        let cfg = LinearCfg::new()
            .set_x(&x).unwrap()
            .set_y(&y).unwrap()
            .set_x_eval(&x_eval).unwrap();

        match interpolate(cfg) {
            Err(InterpolationError::OutOfBounds { got, x_min, x_max }) => {
                assert_eq!(got, xq);
                assert_eq!(x_min, 0.0);
                assert_eq!(x_max, 1.0);
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }
}

#[test]
fn extrapolation() -> NodalResult {
    let x      = [0.0, 1.0, 3.0];
    let y      = [0.0, 2.0, 3.0];
    let x_eval = [-1.0, 5.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?
        .set_extrapolate(true);
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "linear extrapolated");
    assert_vec_close(&rep.evaluated, &[-2.0, 4.0]);
    Ok(())
}

#[test]
fn sorted_sweep_reuses_brackets() -> NodalResult {
    let x      = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y      = [0.0, 1.0, 3.0, 6.0, 10.0];
    let x_eval = [0.5, 0.9, 2.0, 4.0, 5.0, 7.0, 12.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?
        .set_extrapolate(true);
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &x_eval);
    assert_eq!(rep.lookups.search, 1);
    assert_eq!(rep.lookups.cached, 3);
    assert_eq!(rep.lookups.adjacent, 3);
    assert_eq!(rep.lookups.direct, 0);
    Ok(())
}

#[test]
fn uniform_data_uses_direct_index() -> NodalResult {
    let x      = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y      = [5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
    let x_eval = [4.5, 0.5];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &[0.5, 4.5]);
    assert_eq!(rep.lookups.direct, 2);
    Ok(())
}

#[test]
fn missing_y_is_reported() -> NodalResult {
    let x = [0.0, 1.0];
    let cfg = LinearCfg::new().set_x(&x)?;
    assert_eq!(interpolate(cfg).unwrap_err(), InterpolationError::EmptyInput);
    Ok(())
}

#[test]
fn rejects_bad_x() {
    let err = LinearCfg::new().set_x(&[0.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateNode { x1: 1.0, x2: 1.0 });

    let err = LinearCfg::new().set_x(&[0.0, 2.0, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::NonIncreasingX);

    let err = LinearCfg::new().set_x(&[0.0]).unwrap_err();
    assert_eq!(err, InterpolationError::InsufficientPoints { got: 1 });
}

#[test]
fn rejects_mismatched_y() -> NodalResult {
    let x = [0.0, 1.0, 2.0];
    let err = LinearCfg::new().set_x(&x)?.set_y(&[1.0, 2.0]).unwrap_err();
    assert_eq!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 });
    Ok(())
}

#[test]
fn x_tol_validation() -> NodalResult {
    assert_eq!(
        LinearCfg::new().set_x_tol(0.0).unwrap_err(),
        InterpolationError::InvalidXTol { got: 0.0 }
    );

    let x = [0.0, 0.5, 1.0];
    let err = LinearCfg::new().set_x_tol(0.75)?.set_x(&x).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateNode { x1: 0.0, x2: 0.5 });
    Ok(())
}
