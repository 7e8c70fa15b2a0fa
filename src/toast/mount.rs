// SPDX-License-Identifier: MPL-2.0
//! The single, shared attachment point toasts render into.
//!
//! Several independent `Toaster`s (an application shell plus an embedded
//! panel, or many toasters in one test process) must not duplicate or tear
//! down each other's overlay layer. They share one [`MountBridge`] passed in
//! explicitly at construction; the bridge reference counts the attachment and
//! only removes it once the last holder has released it and nothing is
//! rendered into it anymore.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Bridge shared between every toaster drawing into the same surface.
pub type SharedMountBridge = Rc<RefCell<MountBridge>>;

/// Identity of one physical attachment. A new id is issued every time the
/// attachment is recreated after a full teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId(u64);

/// The physical overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    id: AttachmentId,
}

impl Attachment {
    #[must_use]
    pub fn id(&self) -> AttachmentId {
        self.id
    }
}

/// Proof that a holder keeps the attachment alive.
///
/// Deliberately not `Clone`: every handle accounts for exactly one reference.
#[derive(Debug, PartialEq, Eq)]
pub struct AttachmentHandle {
    token: u64,
    attachment: AttachmentId,
}

impl AttachmentHandle {
    #[must_use]
    pub fn attachment(&self) -> AttachmentId {
        self.attachment
    }
}

#[derive(Debug, Default)]
pub struct MountBridge {
    attachment: Option<Attachment>,
    /// Rendered children per live handle token.
    holders: HashMap<u64, usize>,
    /// Children left behind by holders that released without clearing them.
    orphaned_children: usize,
    next_token: u64,
    next_attachment: u64,
}

impl MountBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bridge ready to be shared between toasters.
    #[must_use]
    pub fn shared() -> SharedMountBridge {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Returns a handle to the attachment, creating it if none exists.
    pub fn acquire(&mut self) -> AttachmentHandle {
        let attachment = match self.attachment {
            Some(attachment) => attachment,
            None => {
                self.next_attachment += 1;
                let attachment = Attachment {
                    id: AttachmentId(self.next_attachment),
                };
                log::debug!("toast attachment {:?} created", attachment.id);
                self.attachment = Some(attachment);
                attachment
            }
        };

        self.next_token += 1;
        self.holders.insert(self.next_token, 0);
        AttachmentHandle {
            token: self.next_token,
            attachment: attachment.id,
        }
    }

    /// Drops one reference. Stale handles (already released, or issued for an
    /// attachment that no longer exists) are ignored.
    pub fn release(&mut self, handle: AttachmentHandle) {
        let Some(children) = self.holders.remove(&handle.token) else {
            return;
        };
        self.orphaned_children += children;
        self.detach_if_idle();
    }

    /// Forgets children left behind by released holders, removing the
    /// attachment if nobody holds it anymore.
    pub fn clear_orphans(&mut self) {
        self.orphaned_children = 0;
        self.detach_if_idle();
    }

    fn detach_if_idle(&mut self) {
        if !self.holders.is_empty() || self.rendered_children() > 0 {
            return;
        }
        if let Some(attachment) = self.attachment.take() {
            log::debug!("toast attachment {:?} removed", attachment.id);
        }
    }

    /// Records how many toasts the holder of `handle` currently renders.
    pub fn sync_children(&mut self, handle: &AttachmentHandle, children: usize) {
        if let Some(count) = self.holders.get_mut(&handle.token) {
            *count = children;
        }
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Returns true if `handle` still holds a live reference.
    #[must_use]
    pub fn holds(&self, handle: &AttachmentHandle) -> bool {
        self.holders.contains_key(&handle.token)
    }

    #[must_use]
    pub fn ref_count(&self) -> usize {
        self.holders.len()
    }

    /// Children still rendered into the attachment by released holders.
    #[must_use]
    pub fn orphaned_children(&self) -> usize {
        self.orphaned_children
    }

    /// Total toasts rendered into the attachment, orphans included.
    #[must_use]
    pub fn rendered_children(&self) -> usize {
        self.holders.values().sum::<usize>() + self.orphaned_children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_is_idempotent() {
        let mut bridge = MountBridge::new();

        let first = bridge.acquire();
        let second = bridge.acquire();

        assert_eq!(first.attachment(), second.attachment());
        assert_eq!(bridge.ref_count(), 2);
    }

    #[test]
    fn attachment_survives_until_last_release() {
        let mut bridge = MountBridge::new();
        let first = bridge.acquire();
        let second = bridge.acquire();

        bridge.release(first);
        assert!(bridge.is_attached());

        bridge.release(second);
        assert!(!bridge.is_attached());
        assert_eq!(bridge.ref_count(), 0);
    }

    #[test]
    fn reacquire_after_teardown_creates_new_attachment() {
        let mut bridge = MountBridge::new();
        let first = bridge.acquire();
        let first_id = first.attachment();
        bridge.release(first);

        let second = bridge.acquire();
        assert_ne!(second.attachment(), first_id);
    }

    #[test]
    fn stale_release_is_ignored() {
        let mut bridge = MountBridge::new();
        let live = bridge.acquire();
        let forged = AttachmentHandle {
            token: 999,
            attachment: live.attachment(),
        };

        bridge.release(forged);

        assert!(bridge.is_attached());
        assert!(bridge.holds(&live));
    }

    #[test]
    fn children_are_summed_across_holders() {
        let mut bridge = MountBridge::new();
        let first = bridge.acquire();
        let second = bridge.acquire();

        bridge.sync_children(&first, 2);
        bridge.sync_children(&second, 3);
        assert_eq!(bridge.rendered_children(), 5);

        bridge.release(first);
        assert_eq!(bridge.orphaned_children(), 2);
        assert_eq!(bridge.rendered_children(), 5);
        assert!(bridge.is_attached());
    }

    #[test]
    fn last_release_keeps_attachment_with_rendered_children() {
        let mut bridge = MountBridge::new();
        let handle = bridge.acquire();
        bridge.sync_children(&handle, 3);

        bridge.release(handle);
        assert!(bridge.is_attached());
        assert_eq!(bridge.ref_count(), 0);
        assert_eq!(bridge.rendered_children(), 3);

        bridge.clear_orphans();
        assert!(!bridge.is_attached());
        assert_eq!(bridge.rendered_children(), 0);
    }

    #[test]
    fn clearing_orphans_keeps_attachment_while_held() {
        let mut bridge = MountBridge::new();
        let first = bridge.acquire();
        let second = bridge.acquire();
        bridge.sync_children(&first, 1);
        bridge.release(first);

        bridge.clear_orphans();

        assert!(bridge.is_attached());
        assert!(bridge.holds(&second));
    }
}
