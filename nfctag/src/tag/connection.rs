// nfctag/src/tag/connection.rs

use std::ops::Deref;

use crate::tag::Tag;
use crate::types::ConnectionState;

/// Live connection to a tag. Dropping it disconnects.
pub struct Connection<'t, T: Tag> {
    tag: &'t T,
}

impl<'t, T: Tag> Connection<'t, T> {
    pub(crate) fn open(tag: &'t T) -> Self {
        tag.base().set_state(ConnectionState::Connected);
        Self { tag }
    }

    pub fn tag(&self) -> &'t T {
        self.tag
    }

    /// Disconnect now instead of at end of scope.
    pub fn close(self) {}
}

impl<T: Tag> Deref for Connection<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.tag
    }
}

impl<T: Tag> Drop for Connection<'_, T> {
    fn drop(&mut self) {
        self.tag.disconnect();
        self.tag.base().set_state(ConnectionState::Disconnected);
    }
}
