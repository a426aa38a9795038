//! Descriptor nodes
//!
//! A descriptor node owns its own duplicate of the descriptor it was created
//! from, and hands out a fresh duplicate on every read. The caller's
//! descriptor, the node's copy and every extracted copy can each be closed
//! without affecting the others.
//!
//! Two descriptor nodes compare equal when they refer to the same open file,
//! identified by the `(device, inode)` pair captured at creation.

use crate::object::{Object, Payload};
use std::io;
use std::mem::MaybeUninit;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, OwnedFd};

/// Identity of the file behind a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub device: u64,
    pub inode: u64,
}

#[derive(Debug)]
pub(crate) struct Descriptor {
    fd: OwnedFd,
    pub(crate) identity: FileIdentity,
}

/// Duplicate a descriptor with close-on-exec set
fn duplicate(fd: BorrowedFd<'_>) -> io::Result<OwnedFd> {
    // Safety: `fd` is borrowed, so it stays open for the duration of the call
    let raw = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_DUPFD_CLOEXEC, 0) };
    if raw < 0 {
        return Err(io::Error::last_os_error());
    }
    // Safety: fcntl just returned a descriptor nothing else owns
    Ok(unsafe { OwnedFd::from_raw_fd(raw) })
}

fn identity(fd: BorrowedFd<'_>) -> io::Result<FileIdentity> {
    let mut stat = MaybeUninit::<libc::stat>::zeroed();
    // Safety: `fd` is borrowed and open; `stat` points to writable space
    // sized for a `libc::stat`
    let rc = unsafe { libc::fstat(fd.as_raw_fd(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // Safety: fstat succeeded, so the buffer is initialized
    let stat = unsafe { stat.assume_init() };
    Ok(FileIdentity {
        device: stat.st_dev as u64,
        inode: stat.st_ino as u64,
    })
}

impl Object {
    /// Create a descriptor node holding a duplicate of `source`
    ///
    /// Fails if the platform refuses the duplication (for example when the
    /// process is out of descriptors). `source` is left untouched.
    pub fn fd_create<F: AsFd>(source: &F) -> io::Result<Object> {
        let fd = duplicate(source.as_fd())?;
        let identity = identity(fd.as_fd())?;
        Ok(Object::from_payload(Payload::Fd(Descriptor { fd, identity })))
    }

    /// Duplicate the descriptor held by this node
    ///
    /// Returns `None` if this is not a descriptor node. Each call yields an
    /// independent descriptor owned by the caller.
    pub fn fd_dup(&self) -> Option<io::Result<OwnedFd>> {
        match self.payload() {
            Payload::Fd(descriptor) => Some(duplicate(descriptor.fd.as_fd())),
            _ => None,
        }
    }

    pub fn fd_identity(&self) -> Option<FileIdentity> {
        match self.payload() {
            Payload::Fd(descriptor) => Some(descriptor.identity),
            _ => None,
        }
    }
}
