/// Tests `n` for primality by trial division with the `6k ± 1` wheel.
///
/// # Example
/// ```
/// use mathkit::property::is_prime;
///
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(is_prime(2_147_483_647));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: u64 = 5;
    while let Some(square) = i.checked_mul(i)
          && square <= n
    {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
