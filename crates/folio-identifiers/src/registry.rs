//! Minters enabled per publishing context
//!
//! Each context keeps at most one minter per identifier type, in the order
//! they were registered.

use std::collections::HashMap;
use std::sync::Arc;

use folio_domain::ContextId;

use crate::error::RegistryError;
use crate::minter::IdentifierMinter;

/// Source of the identifier minters enabled for a publishing context.
pub trait MinterRegistry: Send + Sync {
    /// Minters for a context, in the registry's own order.
    fn load_minters(
        &self,
        context_id: ContextId,
    ) -> Result<Vec<Arc<dyn IdentifierMinter>>, RegistryError>;
}

/// Registry of minters keyed by context and identifier type.
///
/// Minters are returned in registration order.
#[derive(Default)]
pub struct ContextMinterRegistry {
    minters: HashMap<ContextId, Vec<Arc<dyn IdentifierMinter>>>,
}

impl ContextMinterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a minter for a context. Returns error if the context already
    /// has a minter for the same identifier type.
    pub fn register(
        &mut self,
        context_id: ContextId,
        minter: Arc<dyn IdentifierMinter>,
    ) -> Result<(), RegistryError> {
        let enabled = self.minters.entry(context_id).or_default();
        if enabled
            .iter()
            .any(|m| m.pub_id_type() == minter.pub_id_type())
        {
            return Err(RegistryError::AlreadyRegistered {
                context_id,
                pub_id_type: minter.pub_id_type().to_string(),
            });
        }
        tracing::debug!(context_id, pub_id_type = minter.pub_id_type(), "registered minter");
        enabled.push(minter);
        Ok(())
    }

    /// Get the minter for one identifier type in a context.
    pub fn get(&self, context_id: ContextId, pub_id_type: &str) -> Option<Arc<dyn IdentifierMinter>> {
        self.minters
            .get(&context_id)?
            .iter()
            .find(|m| m.pub_id_type() == pub_id_type)
            .cloned()
    }

    /// Identifier types enabled for a context.
    pub fn pub_id_types(&self, context_id: ContextId) -> Vec<&str> {
        self.minters
            .get(&context_id)
            .map(|enabled| enabled.iter().map(|m| m.pub_id_type()).collect())
            .unwrap_or_default()
    }
}

impl MinterRegistry for ContextMinterRegistry {
    fn load_minters(
        &self,
        context_id: ContextId,
    ) -> Result<Vec<Arc<dyn IdentifierMinter>>, RegistryError> {
        Ok(self.minters.get(&context_id).cloned().unwrap_or_default())
    }
}
