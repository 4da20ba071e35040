use throwing::example::{add, Overflow};
use throwing::{
    identity, max_by, min_by, ThrowingBiFunction, ThrowingBinaryOperator, ThrowingFunction,
    ThrowingUnaryOperator,
};

fn apply_all<E>(op: impl ThrowingUnaryOperator<i32, E>, values: &[i32]) -> Result<Vec<i32>, E> {
    values.iter().map(|&value| op.apply(value)).collect()
}

#[test]
fn identity_returns_argument() {
    let id = identity::<String, Overflow>();
    assert_eq!(id.apply("a".to_string()), Ok("a".to_string()));
    assert_eq!(id.unchecked()("b".to_string()), "b");
}

#[test]
fn identity_is_a_unary_operator() {
    assert_eq!(apply_all(identity::<i32, Overflow>(), &[1, 2, 3]), Ok(vec![1, 2, 3]));
}

#[test]
fn unary_operator_bound() {
    let double = |n: i32| add(n, n);
    assert_eq!(apply_all(double, &[1, 2]), Ok(vec![2, 4]));
    assert_eq!(apply_all(double, &[1, i32::MAX]), Err(Overflow(-2)));
}

#[test]
fn identity_composes() {
    let double = |n: i32| add(n, n);
    let id = identity::<i32, Overflow>();
    assert_eq!(id.and_then(double).apply(3), Ok(6));
    assert_eq!(double.compose(id).apply(4), Ok(8));
    assert_eq!(id.and_then(double).apply(i32::MAX), Err(Overflow(-2)));
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Entry {
    key: u8,
    tag: char,
}

fn by_key(a: &Entry, b: &Entry) -> std::cmp::Ordering {
    a.key.cmp(&b.key)
}

#[test]
fn min_by_and_max_by() {
    let (low, high) = (Entry { key: 1, tag: 'l' }, Entry { key: 2, tag: 'h' });
    let min = min_by::<_, Overflow>(by_key);
    let max = max_by::<_, Overflow>(by_key);
    assert_eq!(min.apply(low, high), Ok(low));
    assert_eq!(min.apply(high, low), Ok(low));
    assert_eq!(max.apply(low, high), Ok(high));
    assert_eq!(max.apply(high, low), Ok(high));
}

#[test]
fn min_by_and_max_by_keep_first_on_tie() {
    let (first, second) = (Entry { key: 1, tag: 'a' }, Entry { key: 1, tag: 'b' });
    assert_eq!(min_by::<_, Overflow>(by_key).apply(first, second), Ok(first));
    assert_eq!(max_by::<_, Overflow>(by_key).apply(first, second), Ok(first));
    assert_eq!(min_by::<_, Overflow>(by_key).apply(second, first), Ok(second));
}

#[test]
fn min_by_in_reduce() {
    let entries = [
        Entry { key: 3, tag: 'a' },
        Entry { key: 1, tag: 'b' },
        Entry { key: 1, tag: 'c' },
    ];
    let min = entries
        .into_iter()
        .reduce(ThrowingBiFunction::unchecked(min_by::<_, Overflow>(by_key)));
    assert_eq!(min.map(|entry| entry.tag), Some('b'));
    let max = entries
        .into_iter()
        .reduce(ThrowingBiFunction::unchecked(max_by::<_, Overflow>(by_key)));
    assert_eq!(max.map(|entry| entry.tag), Some('a'));
}

#[test]
fn min_by_is_a_binary_operator() {
    fn combine<E>(op: impl ThrowingBinaryOperator<i32, E>) -> Result<i32, E> {
        op.apply(4, 2)
    }
    assert_eq!(combine(min_by::<_, Overflow>(i32::cmp)), Ok(2));
    assert_eq!(combine(max_by::<_, Overflow>(i32::cmp)), Ok(4));
}
