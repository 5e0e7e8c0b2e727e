// nfctag/src/tag/dispatch.rs

use std::fmt;

use crate::Result;
use crate::device::{Device, Initialized};
use crate::tag::{GenericTag, IsoDepTag, Tag};
use crate::target::Target;

/// Known tag protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    IsoDep,
    Generic,
}

impl TagKind {
    /// Most specific first. `Generic` matches everything and must stay last.
    pub const PRIORITY: [TagKind; 2] = [TagKind::IsoDep, TagKind::Generic];

    pub fn matches(self, target: &Target) -> bool {
        match self {
            Self::IsoDep => IsoDepTag::matches(target),
            Self::Generic => GenericTag::matches(target),
        }
    }

    /// First kind in priority order that matches the target.
    pub fn detect(target: &Target) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.matches(target))
            .unwrap_or(Self::Generic)
    }
}

/// A tag wrapped in the most specific protocol that can handle it.
pub enum AnyTag<'a> {
    IsoDep(IsoDepTag<'a>),
    Generic(GenericTag<'a>),
}

impl<'a> AnyTag<'a> {
    pub fn new(target: &'a Target, device: &'a Device<Initialized>) -> Self {
        match TagKind::detect(target) {
            TagKind::IsoDep => Self::IsoDep(IsoDepTag::new(target, device)),
            TagKind::Generic => Self::Generic(GenericTag::new(target, device)),
        }
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Self::IsoDep(_) => TagKind::IsoDep,
            Self::Generic(_) => TagKind::Generic,
        }
    }

    pub fn as_iso_dep(&self) -> Option<&IsoDepTag<'a>> {
        match self {
            Self::IsoDep(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn into_iso_dep(self) -> Option<IsoDepTag<'a>> {
        match self {
            Self::IsoDep(tag) => Some(tag),
            _ => None,
        }
    }
}

impl Tag for AnyTag<'_> {
    fn matches(_target: &Target) -> bool {
        true
    }

    fn base(&self) -> &GenericTag<'_> {
        match self {
            Self::IsoDep(tag) => tag.base(),
            Self::Generic(tag) => tag.base(),
        }
    }

    fn activate(&self) -> Result<()> {
        match self {
            Self::IsoDep(tag) => tag.activate(),
            Self::Generic(tag) => tag.activate(),
        }
    }

    fn disconnect(&self) {
        match self {
            Self::IsoDep(tag) => tag.disconnect(),
            Self::Generic(tag) => tag.disconnect(),
        }
    }
}

impl fmt::Display for AnyTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uid_hex())
    }
}
