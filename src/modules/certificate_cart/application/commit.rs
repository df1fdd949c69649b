use crate::modules::certificate_cart::application::errors::CartError;
use crate::modules::certificate_cart::core::cart::CartState;
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::{CartRepository, CartRepositoryError};

pub const DEFAULT_WRITE_ATTEMPTS: u32 = 3;

/// Loads the user's cart, applies `decide` and saves the result against the
/// loaded version. A version conflict re-runs the whole cycle on a fresh load,
/// at most `max_attempts` times in total.
pub async fn commit_with_retry<TRepository, F>(
    repository: &TRepository,
    user_id: &UserId,
    max_attempts: u32,
    mut decide: F,
) -> Result<CartState, CartError>
where
    TRepository: CartRepository + ?Sized,
    F: FnMut(CartState) -> Result<CartState, DecideError> + Send,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let loaded = repository.load(user_id).await?;
        let next = decide(loaded.state)?;
        match repository.save(user_id, loaded.version, next.clone()).await {
            Ok(_) => return Ok(next),
            Err(CartRepositoryError::VersionMismatch { expected, actual })
                if attempt < max_attempts =>
            {
                tracing::warn!(
                    user_id = %user_id,
                    attempt,
                    expected,
                    actual,
                    "cart changed concurrently, retrying"
                );
                attempt += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }
}
