/// Cooperative cancellation for render workers.
///
/// Workers consult the token between blocks, never mid-block, so a
/// cancelled render always leaves whole blocks either fully painted or
/// untouched. Cancellation is not an error: the render stops early and
/// reports how many blocks it completed.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for renders that should always run to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
