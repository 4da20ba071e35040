mod common;

use common::{unwind_payload, Calls, Failure};
use throwing::example::{add, Overflow};
use throwing::{checked_as, ThrowingBiFunction, ThrowingBinaryOperator, WrappedError};

#[test]
fn apply_passes_both_arguments() {
    let concat = |a: &str, b: &str| Ok::<_, Failure>(format!("{a}{b}"));
    assert_eq!(concat.apply("ab", "cd").unwrap(), "abcd");
    assert_eq!(add.apply(2, 3), Ok(5));
    assert_eq!(add.apply(i32::MAX, 1), Err(Overflow(i32::MIN)));
}

#[test]
fn unchecked_in_reduce() {
    let sum = [1, 2, 3, 4]
        .into_iter()
        .reduce(ThrowingBiFunction::unchecked(add));
    assert_eq!(sum, Some(10));
}

#[test]
fn unchecked_overflow_is_recovered() {
    let result = checked_as::<Overflow, _>(|| {
        [i32::MAX - 1, 1, 1]
            .into_iter()
            .reduce(ThrowingBiFunction::unchecked(add))
    });
    assert_eq!(result, Err(Overflow(i32::MIN)));
}

#[test]
fn unchecked_wraps_error() {
    let payload = unwind_payload(|| ThrowingBiFunction::unchecked(add)(i32::MAX, 1));
    let wrapped = payload.downcast::<WrappedError>().unwrap();
    assert_eq!(wrapped.to_string(), "integer overflow (wrapped to -2147483648)");
    assert_eq!(wrapped.downcast_ref::<Overflow>(), Some(&Overflow(i32::MIN)));
}

#[test]
fn sneaky_unwinds_with_original_error() {
    let payload = unwind_payload(|| ThrowingBiFunction::sneaky(add)(i32::MAX, 1));
    assert_eq!(*payload.downcast::<Overflow>().unwrap(), Overflow(i32::MIN));
}

#[test]
fn lift_present_and_absent() {
    let add = ThrowingBiFunction::lift(add);
    assert_eq!(add(1, 2), Some(3));
    assert_eq!(add(i32::MAX, 1), None);
}

#[test]
fn lift_flatten_collapses_successful_none() {
    let checked_div = |a: i32, b: i32| {
        if a < 0 {
            Err(Failure::new("negative"))
        } else {
            Ok(a.checked_div(b))
        }
    };
    assert_eq!(checked_div.lift()(4, 0), Some(None));
    let div = checked_div.lift_flatten();
    assert_eq!(div(4, 2), Some(2));
    assert_eq!(div(4, 0), None);
    assert_eq!(div(-4, 2), None);
}

#[test]
fn and_then_chains() {
    let calls = Calls::default();
    let doubled = add.and_then(|sum: i32| {
        calls.hit();
        add(sum, sum)
    });
    assert_eq!(doubled.apply(1, 2), Ok(6));
    assert_eq!(calls.count(), 1);
    assert_eq!(doubled.apply(i32::MAX, 1), Err(Overflow(i32::MIN)));
    assert_eq!(calls.count(), 1);
    assert_eq!(doubled.apply(1 << 30, 0), Err(Overflow(i32::MIN)));
    assert_eq!(calls.count(), 2);
}

#[test]
fn and_then_converts_second_stage_error() {
    let sum = |a: i32, b: i32| add(a, b).map_err(|error| error.to_string());
    let described = sum.and_then(|sum: i32| match sum {
        0 => Err("zero"),
        sum => Ok(sum.to_string()),
    });
    assert_eq!(described.apply(1, 2), Ok("3".to_string()));
    assert_eq!(described.apply(1, -1), Err("zero".to_string()));
    assert_eq!(
        described.apply(i32::MAX, 1),
        Err("integer overflow (wrapped to -2147483648)".to_string())
    );
}

#[test]
fn binary_operator_bound() {
    fn fold<E>(op: impl ThrowingBinaryOperator<i32, E>, values: &[i32]) -> Result<i32, E> {
        values.iter().try_fold(0, |acc, &value| op.apply(acc, value))
    }

    assert_eq!(fold(add, &[1, 2, 3]), Ok(6));
    assert_eq!(fold(add, &[i32::MAX, 1]), Err(Overflow(i32::MIN)));
}
