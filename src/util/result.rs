use std::error::Error;
use std::hint;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;

    /// Acts like [`ResultExtension::throw`] in debug builds and like
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) in the error branch for release
    /// builds, letting the check disappear entirely.
    ///
    /// # Safety
    /// It is the responsibility of the caller to ensure that the [`Result`] can't be an [`Err`].
    unsafe fn assume_ok(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }

    #[track_caller]
    unsafe fn assume_ok(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) if cfg!(debug_assertions) => panic!("{}", error),
            // SAFETY: It is the responsibility of the caller to ensure that Err is impossible when
            // invoking this method.
            Err(_) => unsafe { hint::unreachable_unchecked() },
        }
    }
}
