use anyhow::Result;
use series_reduce::testing::*;
use series_reduce::{ExecMode, Number, ReducerKind, Series, reduce, reduce_all};

fn batch() -> Vec<Series> {
    (0..64)
        .map(|i| {
            let mut b = SeriesBuilder::new().name(format!("s{i}"));
            for j in 0..(i % 9) {
                b = if (i + j) % 4 == 0 {
                    b.add_null()
                } else {
                    b.add_value(f64::from(i * 10 + j))
                };
            }
            b.build()
        })
        .collect()
}

#[test]
fn sequential_matches_single_reductions() -> Result<()> {
    let series = batch();
    for kind in ReducerKind::ALL {
        let out = reduce_all(&series, kind, ExecMode::Sequential)?;
        let expected: Vec<Number> = series.iter().map(|s| reduce(s, kind)).collect();
        assert_numbers_equal(&out, &expected);
    }
    Ok(())
}

#[test]
fn parallel_matches_sequential() -> Result<()> {
    let series = batch();
    for kind in ReducerKind::ALL {
        let seq = reduce_all(&series, kind, ExecMode::Sequential)?;
        let par = reduce_all(&series, kind, ExecMode::Parallel)?;
        let pooled = reduce_all(&series, kind, ExecMode::ParallelWith { threads: 3 })?;
        assert_numbers_equal(&par, &seq);
        assert_numbers_equal(&pooled, &seq);
    }
    Ok(())
}

#[test]
fn empty_batch() -> Result<()> {
    assert!(reduce_all(&[], ReducerKind::Avg, ExecMode::default())?.is_empty());
    Ok(())
}

#[test]
fn batch_keeps_input_order() -> Result<()> {
    let series = vec![
        Series::from_values(vec![3.0]),
        Series::new(),
        Series::from_samples(vec![None, Some(1.0)]),
    ];
    let out = reduce_all(&series, ReducerKind::Last, ExecMode::Parallel)?;
    assert_numbers_equal(
        &out,
        &[Number::from_value(3.0), Number::no_value(), Number::from_value(1.0)],
    );
    Ok(())
}

#[cfg(not(feature = "parallel"))]
#[test]
fn parallel_modes_fall_back_to_sequential_without_rayon() -> Result<()> {
    let series = batch();
    let seq = reduce_all(&series, ReducerKind::Median, ExecMode::Sequential)?;
    let pooled = reduce_all(&series, ReducerKind::Median, ExecMode::ParallelWith { threads: 4 })?;
    assert_numbers_equal(&pooled, &seq);
    Ok(())
}
