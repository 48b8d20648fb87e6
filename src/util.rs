const INLINE_STACK_SIZE: usize = 32;

/// The explicit stack used by every walk which would otherwise recurse.
///
/// Shallow trees never leave the inline buffer; degenerate ones spill to the heap instead of
/// overflowing the call stack.
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;

/// Reports a broken structural invariant, which can only be caused by a bug in the crate.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn invariant_violation(msg: &str) -> ! {
    // The forest is in a corrupted state at this point, so we should just abort the process
    // to prevent unwinders from observing it
    abort_on_panic(|| panic!("tree invariant violated: {}", msg));
    unreachable!("abort_on_panic returned from a panicking closure")
}

#[inline]
pub(crate) fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
            .unwrap_or_else(|_| std::process::exit(101))
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
