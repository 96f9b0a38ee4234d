//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! enums with explicit discriminants. Lists are allocated as boxed slices so
//! the matching `urban_free_*` call can rebuild and drop them exactly.
//! Conversion and release helpers live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use urban_core::{AutoCompleteItem, Definition, QueryState, Segment};

/// Opaque handle to a `QueryState` session. C callers receive a pointer to
/// this and pass it back into every session function.
pub struct FfiSession {
    pub(crate) inner: QueryState,
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// A single dictionary entry exposed to C. Every string is non-null.
#[repr(C)]
pub struct FfiDefinition {
    pub definition: *mut c_char,
    pub permalink: *mut c_char,
    pub thumbs_up: i64,
    pub author: *mut c_char,
    pub word: *mut c_char,
    pub def_id: i64,
    pub current_vote: *mut c_char,
    pub written_on: *mut c_char,
    pub example: *mut c_char,
    pub thumbs_down: i64,
}

impl FfiDefinition {
    fn from_core(d: &Definition) -> Self {
        Self {
            definition: c_string(&d.definition),
            permalink: c_string(&d.permalink),
            thumbs_up: d.thumbs_up,
            author: c_string(&d.author),
            word: c_string(&d.word),
            def_id: d.def_id,
            current_vote: c_string(&d.current_vote),
            written_on: c_string(&d.written_on),
            example: c_string(&d.example),
            thumbs_down: d.thumbs_down,
        }
    }

    /// Free the C-string fields (but not the struct itself).
    unsafe fn free_fields(&self) {
        for s in [
            self.definition,
            self.permalink,
            self.author,
            self.word,
            self.current_vote,
            self.written_on,
            self.example,
        ] {
            free_c_string(s);
        }
    }
}

/// A list of definitions exposed to C. `items` is null when `len` is 0.
#[repr(C)]
pub struct FfiDefinitionList {
    pub items: *mut FfiDefinition,
    pub len: u32,
}

impl FfiDefinitionList {
    pub(crate) fn from_core(items: &[Definition]) -> *mut Self {
        let (items, len) = into_raw_slice(items.iter().map(FfiDefinition::from_core).collect());
        Box::into_raw(Box::new(Self { items, len }))
    }

    /// # Safety
    /// `list` must come from `from_core` and not have been freed.
    pub(crate) unsafe fn free(list: *mut Self) {
        let list = Box::from_raw(list);
        for item in from_raw_slice(list.items, list.len).iter() {
            item.free_fields();
        }
    }
}

// ---------------------------------------------------------------------------
// Autocomplete
// ---------------------------------------------------------------------------

/// One autocomplete suggestion exposed to C.
#[repr(C)]
pub struct FfiAutoCompleteItem {
    pub preview: *mut c_char,
    pub term: *mut c_char,
}

#[repr(C)]
pub struct FfiAutoCompleteList {
    pub items: *mut FfiAutoCompleteItem,
    pub len: u32,
}

impl FfiAutoCompleteList {
    pub(crate) fn from_core(items: &[AutoCompleteItem]) -> *mut Self {
        let converted = items
            .iter()
            .map(|i| FfiAutoCompleteItem {
                preview: c_string(&i.preview),
                term: c_string(&i.term),
            })
            .collect();
        let (items, len) = into_raw_slice(converted);
        Box::into_raw(Box::new(Self { items, len }))
    }

    /// # Safety
    /// `list` must come from `from_core` and not have been freed.
    pub(crate) unsafe fn free(list: *mut Self) {
        let list = Box::from_raw(list);
        for item in from_raw_slice(list.items, list.len).iter() {
            free_c_string(item.preview);
            free_c_string(item.term);
        }
    }
}

// ---------------------------------------------------------------------------
// Urbanized text
// ---------------------------------------------------------------------------

#[repr(C)]
pub enum FfiSegmentKind {
    Plain = 0,
    Reference = 1,
}

/// One run of urbanized text. For references `text` is the trimmed term.
#[repr(C)]
pub struct FfiSegment {
    pub kind: FfiSegmentKind,
    pub text: *mut c_char,
}

#[repr(C)]
pub struct FfiSegmentList {
    pub items: *mut FfiSegment,
    pub len: u32,
}

impl FfiSegmentList {
    pub(crate) fn from_core(segments: &[Segment<'_>]) -> *mut Self {
        let converted = segments
            .iter()
            .map(|s| FfiSegment {
                kind: if s.is_reference() {
                    FfiSegmentKind::Reference
                } else {
                    FfiSegmentKind::Plain
                },
                text: c_string(s.text()),
            })
            .collect();
        let (items, len) = into_raw_slice(converted);
        Box::into_raw(Box::new(Self { items, len }))
    }

    /// # Safety
    /// `list` must come from `from_core` and not have been freed.
    pub(crate) unsafe fn free(list: *mut Self) {
        let list = Box::from_raw(list);
        for item in from_raw_slice(list.items, list.len).iter() {
            free_c_string(item.text);
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Allocate a C string. Interior NULs cannot be represented and are dropped.
fn c_string(s: &str) -> *mut c_char {
    let owned = if s.contains('\0') {
        s.replace('\0', "")
    } else {
        s.to_string()
    };
    CString::new(owned).unwrap_or_default().into_raw()
}

unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

fn into_raw_slice<T>(items: Vec<T>) -> (*mut T, u32) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let len = items.len() as u32;
    (Box::into_raw(items.into_boxed_slice()) as *mut T, len)
}

/// Reclaim a slice produced by `into_raw_slice`; an empty box for null.
unsafe fn from_raw_slice<T>(items: *mut T, len: u32) -> Box<[T]> {
    if items.is_null() || len == 0 {
        return Box::new([]);
    }
    Box::from_raw(std::ptr::slice_from_raw_parts_mut(items, len as usize))
}
