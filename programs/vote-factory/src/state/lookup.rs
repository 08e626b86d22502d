use anchor_lang::prelude::*;

/// Deserializes a program account that may not have been created yet.
///
/// Returns `None` while the address is still owned by the system program or
/// holds no data; an account that exists but fails to deserialize is an error.
pub fn load_initialized<T: AccountDeserialize>(owner: &Pubkey, data: &[u8]) -> Result<Option<T>> {
    if owner != &crate::ID || data.is_empty() {
        return Ok(None);
    }
    T::try_deserialize(&mut &data[..]).map(Some)
}
