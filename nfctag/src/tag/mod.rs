// nfctag/src/tag/mod.rs

//! Tag protocols layered over a reader [`Device`](crate::device::Device).
//!
//! Every tag type implements [`Tag`]: a capability predicate used by
//! [`TagKind::detect`], the shared presence/UID helpers of [`GenericTag`], and
//! a scoped connection. [`Tag::connect`] runs the type's activation and hands
//! back a [`Connection`] guard whose drop runs [`Tag::disconnect`], so the
//! reader's target is released on every exit path.

use crate::Error;
use crate::Result;
use crate::target::Target;
use crate::types::ConnectionState;

pub mod connection;
pub mod dispatch;
pub mod generic;
pub mod isodep;

pub use connection::Connection;
pub use dispatch::{AnyTag, TagKind};
pub use generic::GenericTag;
pub use isodep::IsoDepTag;

pub trait Tag {
    /// Whether this tag type can handle the target.
    fn matches(target: &Target) -> bool
    where
        Self: Sized;

    /// Shared state: target, device and connection state.
    fn base(&self) -> &GenericTag<'_>;

    /// Protocol activation run by `connect` before the guard is handed out.
    fn activate(&self) -> Result<()> {
        Ok(())
    }

    /// Protocol release run when the [`Connection`] guard is dropped. Must not
    /// fail: it runs during cleanup.
    fn disconnect(&self) {}

    /// Activate the tag and return a guard that disconnects on drop.
    fn connect(&self) -> Result<Connection<'_, Self>>
    where
        Self: Sized,
    {
        if self.state() == ConnectionState::Connected {
            return Err(Error::AlreadyConnected);
        }
        self.activate()?;
        Ok(Connection::open(self))
    }

    /// Run `body` inside a connection. The tag is disconnected after `body`
    /// returns, whether it succeeded, failed or panicked, and the body's result
    /// is passed through.
    fn session<R, F>(&self, body: F) -> Result<R>
    where
        Self: Sized,
        F: FnOnce(&Connection<'_, Self>) -> Result<R>,
    {
        let connection = self.connect()?;
        body(&connection)
    }

    fn state(&self) -> ConnectionState {
        self.base().state()
    }

    /// Re-select the target to check it is still in the field.
    fn present(&self) -> bool {
        self.base().present()
    }

    fn target(&self) -> &Target {
        self.base().target()
    }

    fn uid(&self) -> &[u8] {
        self.base().uid()
    }

    fn uid_hex(&self) -> String {
        self.base().uid_hex()
    }

    fn mark_processed(&self) {
        self.base().target().mark_processed()
    }

    fn is_processed(&self) -> bool {
        self.base().target().is_processed()
    }
}
