//! Postal-code lookup port

use async_trait::async_trait;
use domain::{AddressRecord, PostalCode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving a postal code to an address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressLookupPort: Send + Sync {
    /// Resolve a normalized postal code
    ///
    /// Fails with `ApplicationError::NotFound` when the service has no
    /// address for the code and `ApplicationError::Lookup` on network or
    /// parse failures. Implementations must not retry.
    async fn resolve(&self, postal_code: &PostalCode) -> Result<AddressRecord, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn AddressLookupPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AddressLookupPort>();
    }
}
