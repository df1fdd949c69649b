// In memory implementation of the CartRepository port.
//
// Carts live for the lifetime of the process, one per user id. Saves are
// checked against the stored version. Deleting a cart leaves an empty one
// behind at the next version, so versions per user only ever grow.

use crate::modules::certificate_cart::core::cart::CartState;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::{
    CartRepository, CartRepositoryError, LoadedCart,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredCart {
    state: CartState,
    version: i64,
}

#[derive(Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<UserId, StoredCart>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before every save; lets tests interleave two writers.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), CartRepositoryError> {
        if self.is_offline {
            return Err(CartRepositoryError::Backend(
                "Cart repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn load(&self, user_id: &UserId) -> Result<LoadedCart, CartRepositoryError> {
        self.ensure_online()?;
        let guard = self.carts.read().await;
        Ok(guard
            .get(user_id)
            .map(|stored| LoadedCart {
                state: stored.state.clone(),
                version: stored.version,
            })
            .unwrap_or(LoadedCart {
                state: CartState::empty(),
                version: 0,
            }))
    }

    async fn save(
        &self,
        user_id: &UserId,
        expected_version: i64,
        state: CartState,
    ) -> Result<i64, CartRepositoryError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.carts.write().await;
        let actual = guard.get(user_id).map_or(0, |stored| stored.version);
        if actual != expected_version {
            return Err(CartRepositoryError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        let version = actual + 1;
        guard.insert(user_id.clone(), StoredCart { state, version });
        Ok(version)
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), CartRepositoryError> {
        self.ensure_online()?;
        let mut guard = self.carts.write().await;
        if let Some(stored) = guard.get_mut(user_id) {
            stored.state = CartState::empty();
            stored.version += 1;
        }
        Ok(())
    }
}
