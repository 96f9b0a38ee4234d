//! C-ABI wrapper around `urban-core`.
//!
//! # Overview
//! Lets a platform UI written in any language with a C FFI drive a dictionary
//! session: refresh the four result slots, read them back as C structs, check
//! the error flag, and split definition text into clickable references.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A session is one `QueryState` behind an opaque pointer; the caller
//!   creates it with `urban_session_new` and releases it (and its HTTP agent)
//!   with `urban_session_free`.
//! - Refresh calls block on the network. They may be issued from several
//!   threads against the same session.
//! - Snapshots are copies. The caller owns every returned pointer and must
//!   release it with the matching `urban_free_*` function.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use urban_core::{urbanize, ClientConfig, QueryState};

use types::*;

/// Slot selector for `urban_definitions`.
pub const URBAN_SLOT_RANDOM: u32 = 0;
pub const URBAN_SLOT_QUICK_SEARCH: u32 = 1;
pub const URBAN_SLOT_SEARCH: u32 = 2;

/// Borrow a C string as UTF-8; `None` for null or invalid UTF-8.
fn borrow_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Run `f` against a live session; `false` for a null session or a panic.
fn with_session(session: *const FfiSession, f: impl FnOnce(&QueryState) -> bool) -> bool {
    if session.is_null() {
        return false;
    }
    let session = unsafe { &*session };
    catch_unwind(AssertUnwindSafe(|| f(&session.inner))).unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

/// Create a session against `base_url`.
///
/// A null `base_url` uses the default configuration (the public API, unless
/// `URBAN_API_BASE_URL` is set). Returns null if `base_url` is not valid
/// UTF-8 or if an internal panic occurs. Free with `urban_session_free`.
#[unsafe(no_mangle)]
pub extern "C" fn urban_session_new(base_url: *const c_char) -> *mut FfiSession {
    catch_unwind(|| {
        let config = if base_url.is_null() {
            ClientConfig::from_env()
        } else {
            match borrow_str(base_url) {
                Some(url) => ClientConfig::with_base_url(url),
                None => return std::ptr::null_mut(),
            }
        };
        let inner = QueryState::connect(&config);
        Box::into_raw(Box::new(FfiSession { inner }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a session created by `urban_session_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_session_free(session: *mut FfiSession) {
    if !session.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(session) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Refresh functions
// ---------------------------------------------------------------------------

/// Load a random page into the random slot.
///
/// Returns true when the slot was replaced. On failure the slot keeps its
/// previous value and the session error flag is set.
#[unsafe(no_mangle)]
pub extern "C" fn urban_refresh_random(session: *const FfiSession) -> bool {
    with_session(session, |s| s.refresh_random())
}

/// Look up `term` into the quick-search slot. False if `term` is null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_refresh_quick_search(
    session: *const FfiSession,
    term: *const c_char,
) -> bool {
    let Some(term) = borrow_str(term) else {
        return false;
    };
    with_session(session, |s| s.refresh_quick_search(term))
}

/// Look up `term` into the search slot. False if `term` is null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_refresh_search(session: *const FfiSession, term: *const c_char) -> bool {
    let Some(term) = borrow_str(term) else {
        return false;
    };
    with_session(session, |s| s.refresh_search(term))
}

/// Load suggestions for `term` into the autocomplete slot.
#[unsafe(no_mangle)]
pub extern "C" fn urban_refresh_autocomplete(
    session: *const FfiSession,
    term: *const c_char,
) -> bool {
    let Some(term) = borrow_str(term) else {
        return false;
    };
    with_session(session, |s| s.refresh_autocomplete(term))
}

/// Random page plus the default quick-search term, as on first display.
#[unsafe(no_mangle)]
pub extern "C" fn urban_refresh_startup(session: *const FfiSession) -> bool {
    with_session(session, |s| s.refresh_startup())
}

/// Whether any refresh on this session has failed. Never resets.
#[unsafe(no_mangle)]
pub extern "C" fn urban_has_error(session: *const FfiSession) -> bool {
    with_session(session, |s| s.has_error())
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Copy one definition slot (`URBAN_SLOT_*`).
///
/// Returns null for a null session or an unknown slot.
/// Free with `urban_free_definition_list`.
#[unsafe(no_mangle)]
pub extern "C" fn urban_definitions(
    session: *const FfiSession,
    slot: u32,
) -> *mut FfiDefinitionList {
    if session.is_null() {
        return std::ptr::null_mut();
    }
    let session = unsafe { &*session };
    catch_unwind(AssertUnwindSafe(|| {
        let list = match slot {
            URBAN_SLOT_RANDOM => session.inner.random(),
            URBAN_SLOT_QUICK_SEARCH => session.inner.quick_search(),
            URBAN_SLOT_SEARCH => session.inner.search(),
            _ => return std::ptr::null_mut(),
        };
        FfiDefinitionList::from_core(&list.items)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Copy the autocomplete slot. Free with `urban_free_autocomplete_list`.
#[unsafe(no_mangle)]
pub extern "C" fn urban_autocomplete(session: *const FfiSession) -> *mut FfiAutoCompleteList {
    if session.is_null() {
        return std::ptr::null_mut();
    }
    let session = unsafe { &*session };
    catch_unwind(AssertUnwindSafe(|| {
        FfiAutoCompleteList::from_core(&session.inner.autocomplete().items)
    }))
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Urbanize
// ---------------------------------------------------------------------------

/// Split `text` into plain and reference segments.
///
/// Returns null if `text` is null or not valid UTF-8.
/// Free with `urban_free_segment_list`.
#[unsafe(no_mangle)]
pub extern "C" fn urban_urbanize(text: *const c_char) -> *mut FfiSegmentList {
    catch_unwind(|| match borrow_str(text) {
        Some(text) => FfiSegmentList::from_core(&urbanize(text)),
        None => std::ptr::null_mut(),
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a list returned by `urban_definitions`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_free_definition_list(list: *mut FfiDefinitionList) {
    if !list.is_null() {
        let _ = catch_unwind(|| unsafe { FfiDefinitionList::free(list) });
    }
}

/// Free a list returned by `urban_autocomplete`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_free_autocomplete_list(list: *mut FfiAutoCompleteList) {
    if !list.is_null() {
        let _ = catch_unwind(|| unsafe { FfiAutoCompleteList::free(list) });
    }
}

/// Free a list returned by `urban_urbanize`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn urban_free_segment_list(list: *mut FfiSegmentList) {
    if !list.is_null() {
        let _ = catch_unwind(|| unsafe { FfiSegmentList::free(list) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
