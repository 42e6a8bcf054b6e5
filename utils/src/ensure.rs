//! Tools for interrupting function flow unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// There are two variants:
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// Example with [Option]:
/// ```
/// # use utils::ensure;
/// fn halve(x: u32) -> Option<u32> {
///     ensure!(x % 2 == 0);
///     Some(x / 2)
/// }
///
/// assert_eq!(halve(6), Some(3));
/// assert_eq!(halve(7), None);
/// ```
///
/// Example with [Result]:
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum PickError {
///     EmptyPool,
/// }
///
/// fn pick_first(pool: &[u32]) -> Result<u32, PickError> {
///     ensure!(!pool.is_empty(), PickError::EmptyPool);
///     Ok(pool[0])
/// }
///
/// assert_eq!(pick_first(&[3, 4]), Ok(3));
/// assert_eq!(pick_first(&[]), Err(PickError::EmptyPool));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}
