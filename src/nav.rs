// src/nav.rs
//
// Alphabet navigation. The link set is fixed chrome (A..Z and `#`), not derived
// from the data; binding pairs each link with the banner it should scroll to.
// Links whose letter never appears stay bound to nothing and do nothing.

use crate::config::consts::NO_LETTER;
use crate::view::{Anchor, Listing};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub letter: String,
}

/// The standard link row: `A`..=`Z`, then `#`.
pub fn alphabet_links() -> Vec<NavLink> {
    ('A'..='Z')
        .map(|c| NavLink { letter: c.to_string() })
        .chain(std::iter::once(NavLink { letter: s!(NO_LETTER) }))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub link: NavLink,
    target: Option<usize>,
}

impl Binding {
    /// Line index to scroll to, or `None` when the section does not exist.
    pub fn activate(&self) -> Option<usize> {
        self.target
    }

    pub fn is_bound(&self) -> bool { self.target.is_some() }

    /// Anchor the link points at, whether or not it exists in the listing.
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.link.letter.clone())
    }
}

/// Attach every link to the banner carrying the same letter.
pub fn bind(links: &[NavLink], listing: &Listing) -> Vec<Binding> {
    links
        .iter()
        .map(|link| Binding {
            link: link.clone(),
            target: listing.anchor_line(&link.letter),
        })
        .collect()
}
