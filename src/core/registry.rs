//! Process-wide codec registry
//!
//! Nothing is registered until [`register`] is called. Search functions are
//! consulted in registration order and the first one that knows a name wins.

use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::core::codec::{find_latex, Codec};
use crate::utils::error::{CodecError, CodecResult};

/// Resolves a codec name, or returns `None` if it is not handled
pub type SearchFunction = fn(&str) -> Option<Codec>;

/// Key under which [`register`] installs [`find_latex`]
pub const LATEX_SEARCH: &str = "latex";

lazy_static! {
    static ref SEARCH_FUNCTIONS: RwLock<IndexMap<&'static str, SearchFunction>> =
        RwLock::new(IndexMap::new());
}

/// Install the `latex` codec family. Calling it again has no effect.
pub fn register() {
    register_search_function(LATEX_SEARCH, find_latex);
}

/// Add or replace a search function. Returns `true` if `key` was new.
pub fn register_search_function(key: &'static str, search: SearchFunction) -> bool {
    let mut functions = SEARCH_FUNCTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let added = functions.insert(key, search).is_none();
    if added {
        log::debug!("registered codec search function {:?}", key);
    }
    added
}

/// Remove a search function. Returns `true` if it was registered.
pub fn unregister(key: &str) -> bool {
    let removed = SEARCH_FUNCTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .shift_remove(key)
        .is_some();
    if removed {
        log::debug!("unregistered codec search function {:?}", key);
    }
    removed
}

/// Remove every search function
pub fn clear() {
    SEARCH_FUNCTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
    log::debug!("cleared codec registry");
}

/// Keys of the registered search functions, in lookup order
pub fn registered() -> Vec<&'static str> {
    SEARCH_FUNCTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect()
}

pub fn is_registered(key: &str) -> bool {
    SEARCH_FUNCTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(key)
}

/// Resolve a codec through the registered search functions.
///
/// The lock is released before any search function runs, so a search
/// function may itself register or unregister.
pub fn lookup(name: &str) -> CodecResult<Codec> {
    let functions: Vec<SearchFunction> = SEARCH_FUNCTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .values()
        .copied()
        .collect();
    functions
        .into_iter()
        .find_map(|search| search(name))
        .ok_or_else(|| CodecError::unknown_codec(name))
}
