use anchor_lang::prelude::*;

use crate::context::CallContext;
use crate::error::DistributorError;

/// Runs `body` with the distributor's reentrancy flag held.
///
/// Nested entry into any guarded operation fails with `ReentrantCall`. The
/// flag is cleared on every return path of `body`, success or failure.
///
/// If `body` fails, the whole ledger is put back as it was on entry. That
/// includes anything a recipient changed through unguarded operations while
/// being paid, and every event emitted in between.
pub fn non_reentrant<'a, B: ?Sized, T>(
    mut ctx: CallContext<'a, B>,
    body: impl FnOnce(&mut CallContext<'a, B>) -> Result<T>,
) -> Result<T> {
    require!(!ctx.distributor.locked, DistributorError::ReentrantCall);

    let snapshot = ctx.distributor.clone();
    ctx.distributor.locked = true;

    let result = body(&mut ctx);
    if result.is_err() {
        *ctx.distributor = snapshot;
    }
    ctx.distributor.locked = false;

    result
}
